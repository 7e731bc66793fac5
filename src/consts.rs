pub mod dashboard_consts {
    //! Dashboard Constants
    //!
    //! Default file locations, display labels and colors for the weather
    //! dashboard, organized by functional area.

    // =============================================================================
    // DATA SOURCES
    // =============================================================================

    /// Directory holding the generated Feather files, relative to the working directory.
    pub const DEFAULT_DATA_DIR: &str = "data";

    /// Hourly readings produced by the data-generation step.
    pub const DEFAULT_HOURLY_FILE: &str = "temp_data.feather";

    /// Daily summaries produced by the data-generation step.
    pub const DEFAULT_DAILY_FILE: &str = "temp_diario.feather";

    /// Command the operator has to run when the data files are missing.
    pub const DATA_GENERATION_COMMAND: &str = "Rscript get-weather.R";

    // =============================================================================
    // LOCAL FILES
    // =============================================================================

    /// Directory under the user's home holding config and logs.
    pub const APP_DIR_NAME: &str = ".weather-dashboard";

    /// Name of the configuration file inside [`APP_DIR_NAME`].
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Name of the log file inside [`APP_DIR_NAME`].
    pub const LOG_FILE_NAME: &str = "dashboard.log";

    // =============================================================================
    // DISPLAY
    // =============================================================================

    /// City shown in the title when the configuration does not name one.
    pub const DEFAULT_CITY: &str = "Santiago, Chile";

    /// Locale tried first when the configuration does not name one.
    pub const DEFAULT_LOCALE: &str = "es_ES.UTF-8";

    /// Format used for dates in tables, selectors and hover text.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format used for timestamps in tables and hover text.
    pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Chart series colors
    pub mod colors {
        use ratatui::style::Color;

        pub const MAX_TEMP: Color = Color::Rgb(0xFF, 0x4B, 0x4B);
        pub const MIN_TEMP: Color = Color::Rgb(0x4B, 0x4B, 0xFF);
        pub const AVG_TEMP: Color = Color::Rgb(0x2E, 0xCC, 0x71);
        pub const HOURLY_TEMP: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
        /// Light blue of the min-max band.
        pub const RANGE_BAND: Color = Color::Rgb(173, 216, 230);
    }

    /// Static text of the sidebar "about" section.
    pub const ABOUT_LINES: [&str; 5] = [
        "Este dashboard muestra el pronóstico del clima.",
        "Datos:",
        "- Fuente: OpenWeather API",
        "- Procesamiento: R (httr2, dplyr)",
        "- Visualización: Rust (ratatui)",
    ];

    /// Footer caption.
    pub const FOOTER_CAPTION: &str = "🌤️ Dashboard del Clima • Datos de OpenWeather API";
}
