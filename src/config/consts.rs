// src/config/consts.rs

// Sources
pub const TIOBE_URL: &str = "https://www.tiobe.com/tiobe-index/";
pub const TECSIFY_URL: &str = "https://tecsify.com/blog/top-lenguajes-2024/";
pub const PYPL_URL: &str = "https://pypl.github.io/PYPL.html";

// Net config
pub const USER_AGENT: &str = concat!("lang_rank/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Filters
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "JavaScript",
    "Python",
    "Ruby",
    "PHP",
    "Java",
    "TypeScript",
    "HTML",
    "CSS",
    "Go",
    "C#",
    "Swift",
];
pub const PYPL_FOOTER: &str = "© Pierre Carbonnelle, 2023";
pub const PYPL_MIN_RANK: u32 = 1;
pub const PYPL_MAX_RANK: u32 = 28;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const AVERAGE_FILE_STEM: &str = "Average_Data";
pub const AVERAGE_LABEL: &str = "Average";

// Config + logs
pub const DEFAULT_CONFIG_FILE: &str = "lang_rank.toml";
pub const LOG_FILE: &str = ".store/debug.log";
