use serde::{Deserialize, Serialize};

/// Configuration for the fullscreen module.
///
/// Missing fields fall back to defaults, so partial JSON config (e.g. from a
/// data attribute) works.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FullscreenOptions {
    /// Enable the fullscreen buttons and keyboard binding. When false, the
    /// controller methods still work but no UI is created.
    pub enabled: bool,
    /// Whether the host manages the gallery viewport height at all.
    pub set_gallery_size: bool,
    /// Poll interval while waiting for a slide animation to settle.
    pub settle_poll_ms: u32,
    /// Upper bound on the settle wait. `None` waits indefinitely, matching
    /// the host's guarantee that `is_animating` eventually clears.
    pub settle_timeout_ms: Option<u32>,
}

impl Default for FullscreenOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            set_gallery_size: true,
            settle_poll_ms: 10,
            settle_timeout_ms: None,
        }
    }
}

impl FullscreenOptions {
    /// Default options with the feature switched on.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_disabled_feature() {
        let options = FullscreenOptions::default();
        assert!(!options.enabled);
        assert!(options.set_gallery_size);
        assert_eq!(options.settle_poll_ms, 10);
        assert_eq!(options.settle_timeout_ms, None);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let options: FullscreenOptions =
            serde_json::from_str(r#"{"enabled": true, "settleTimeoutMs": 500}"#).unwrap();
        assert!(options.enabled);
        assert!(options.set_gallery_size);
        assert_eq!(options.settle_poll_ms, 10);
        assert_eq!(options.settle_timeout_ms, Some(500));
    }
}
