//! Application constants and configuration

pub const DEFAULT_API_BASE_URL: &str = "https://convertercode.onrender.com";
pub const CONVERT_PATH: &str = "/code/convert";
pub const DEBUG_PATH: &str = "/code/debug";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Code Converter";
pub const APP_TITLE: &str = "Converter & Debugger";
pub const APP_SUBTITLE: &str = "Convert your code";

pub const INPUT_HINT: &str = "Enter your code here...";
pub const CONVERTED_HINT: &str = "Converted code will appear here...";
pub const DEBUGGED_HINT: &str = "Debugged code will appear here...";
