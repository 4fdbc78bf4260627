pub const APPLICATION_NAME: &str = "vision-detect";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_DISPATCH: &str = "[DISPATCH]";
pub const LOG_TAG_VISION: &str = "[VISION]";
pub const LOG_TAG_LOADER: &str = "[LOADER]";
pub const LOG_TAG_ISBN: &str = "[ISBN]";
pub const LOG_TAG_LOTTO: &str = "[LOTTO]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const DEFAULT_VISION_API_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

pub const ENV_API_KEY: &str = "GOOGLE_VISION_API_KEY";
pub const ENV_SETTINGS_PATH: &str = "VISION_DETECT_SETTINGS";

pub const SETTINGS_DIRECTORY_NAME: &str = "vision-detect";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const ISBN_MARKER: &str = "ISBN";

/// Five space-separated two-digit numbers, then a sixth one somewhere after.
/// Digits and separators are ASCII only.
pub const LOTTERY_NUMBERS_PATTERN: &str = r"([0-9]{2}[ \t\n\x0B\f\r]){4}[0-9]{2}.*[0-9]{2}";

pub const OUTPUT_PREFIX_TEXT: &str = "Text: ";
pub const OUTPUT_PREFIX_POSITION: &str = "Position : ";
pub const OUTPUT_PREFIX_ERROR: &str = "Error: ";
pub const OUTPUT_PREFIX_ISBN_RETURN: &str = "return:";
pub const OUTPUT_PREFIX_LOTTO_RETURN: &str = "Detect returns:";
pub const MESSAGE_LOTTO_NOT_FOUND: &str = "Detect didn't find anything that looks like lotto numbers!";

pub const ADVERTISED_ONLY_COMMANDS: &[&str] = &[
    "faces",
    "labels",
    "landmarks",
    "logos",
    "safe-search",
    "properties",
    "web",
    "crop",
];

pub const USAGE_TEXT: &str = "Usage:
\tvision-detect <command> <path-to-image>
Commands:
\tfaces | labels | landmarks | logos | text | safe-search | properties| web | crop
Path:
\tA file path (ex: ./resources/wakeupcat.jpg) or a URI for a Cloud Storage resource (gs://...)
";
