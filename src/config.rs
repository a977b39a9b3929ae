use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str) -> Option<u8> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
}

/// Accept only versions 1-4; anything else reads as unset
fn valid_version(raw: Option<u8>) -> Option<u8> {
    raw.filter(|v| (1..=4).contains(v))
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASK_SEARCH: OnceLock<bool> = OnceLock::new();

/// Score the eight mask candidates on the rayon pool (`QR_PARALLEL_MASK_SEARCH`)
pub fn parallel_mask_search() -> bool {
    *PARALLEL_MASK_SEARCH.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASK_SEARCH", true))
}

static DEFAULT_VERSION: OnceLock<Option<u8>> = OnceLock::new();

/// Version used when none is requested (`QR_DEFAULT_VERSION`, 1-4);
/// None, also for unparsable or out-of-range values, means "smallest version that fits"
pub fn default_version() -> Option<u8> {
    *DEFAULT_VERSION.get_or_init(|| valid_version(parse_env_u8("QR_DEFAULT_VERSION")))
}

static RENDER_SCALE: OnceLock<usize> = OnceLock::new();

/// Pixels per module for rendered images (`QR_RENDER_SCALE`)
pub fn render_scale() -> usize {
    *RENDER_SCALE.get_or_init(|| parse_env_usize("QR_RENDER_SCALE", 10).clamp(1, 100))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Light border width in modules for rendered images (`QR_QUIET_ZONE`)
pub fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("QR_QUIET_ZONE", 4).min(16))
}
