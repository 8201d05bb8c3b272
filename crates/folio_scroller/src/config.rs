//! Scroller configuration
//!
//! Every option has a default, so a partial TOML fragment (or none at all)
//! yields a usable configuration:
//!
//! ```toml
//! start = 1
//! orientation = "horizontal"
//! custom_transition = "fade"
//! custom_duration = { enter = 200, exit = 300 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gesture::Orientation;
use crate::transition::{BuiltinTransition, Transition, TransitionTiming};

/// Configuration for a page scroller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Requested initial page; invalid values fall back to page 0
    pub start: f64,
    /// Built-in transition preset, used unless a custom transition is set
    pub transition: BuiltinTransition,
    /// Axis that navigates (wheel and swipe)
    pub orientation: Orientation,
    /// Renderer-defined transition name; overrides `transition` when non-empty
    #[serde(alias = "customTransition")]
    pub custom_transition: Option<String>,
    /// Timing for the custom transition (ignored without one)
    #[serde(alias = "customDuration")]
    pub custom_duration: TransitionTiming,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self::vertical()
    }
}

impl ScrollerConfig {
    /// Vertical stack with the built-in transition
    pub fn vertical() -> Self {
        Self {
            start: 0.0,
            transition: BuiltinTransition::default(),
            orientation: Orientation::Vertical,
            custom_transition: None,
            custom_duration: TransitionTiming::default(),
        }
    }

    /// Horizontal stack with the built-in transition
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            ..Self::vertical()
        }
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Set the requested start page.
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Set the navigation axis.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Select a built-in transition preset.
    pub fn with_transition(mut self, transition: BuiltinTransition) -> Self {
        self.transition = transition;
        self
    }

    /// Use a renderer-defined transition with its own timing.
    pub fn with_custom_transition(
        mut self,
        name: impl Into<String>,
        duration: TransitionTiming,
    ) -> Self {
        self.custom_transition = Some(name.into());
        self.custom_duration = duration;
        self
    }

    /// Resolve the option surface to a single transition
    ///
    /// An empty custom name counts as unset.
    pub fn resolved_transition(&self) -> Transition {
        match self.custom_transition.as_deref() {
            Some(name) if !name.is_empty() => Transition::custom(name, self.custom_duration),
            _ => Transition::Builtin(self.transition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = ScrollerConfig::default();
        assert_eq!(config.start, 0.0);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.transition, BuiltinTransition::MoveTopBottom);
        assert_eq!(config.custom_transition, None);
        assert_eq!(config.custom_duration, TransitionTiming::new(1000, 1000));
        assert_eq!(
            config.resolved_transition(),
            Transition::Builtin(BuiltinTransition::MoveTopBottom)
        );
    }

    #[test]
    fn test_from_empty_toml() {
        let config = ScrollerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScrollerConfig::default());
    }

    #[test]
    fn test_from_toml() {
        let config = ScrollerConfig::from_toml_str(
            r#"
            start = 2
            orientation = "horizontal"
            transition = "move-top-bottom"
            custom_transition = "fade"
            custom_duration = { enter = 200, exit = 300 }
            "#,
        )
        .unwrap();

        assert_eq!(config.start, 2.0);
        assert_eq!(config.orientation, Orientation::Horizontal);
        let transition = config.resolved_transition();
        assert_eq!(transition.class_stem(), "fade");
        assert_eq!(transition.unlock_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_from_toml_camel_case_aliases() {
        let config = ScrollerConfig::from_toml_str(
            r#"
            customTransition = "zoom"
            customDuration = { enter = 50, exit = 75 }
            "#,
        )
        .unwrap();
        assert_eq!(config.custom_transition.as_deref(), Some("zoom"));
        assert_eq!(config.custom_duration, TransitionTiming::new(50, 75));
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let err = ScrollerConfig::from_toml_str(r#"orientation = "diagonal""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ScrollerConfig::from_toml_str(r#"transition = "spin""#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid scroller configuration"));
    }

    #[test]
    fn test_empty_custom_name_uses_builtin() {
        let config = ScrollerConfig::horizontal()
            .with_custom_transition("", TransitionTiming::new(10, 10));
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(
            config.resolved_transition(),
            Transition::Builtin(BuiltinTransition::MoveTopBottom)
        );
        assert_eq!(
            config.resolved_transition().unlock_delay(),
            Duration::from_millis(800)
        );
    }

    #[test]
    fn test_builders() {
        let config = ScrollerConfig::vertical()
            .with_start(3.0)
            .with_orientation(Orientation::Horizontal)
            .with_transition(BuiltinTransition::MoveTopBottom);
        assert_eq!(config.start, 3.0);
        assert_eq!(config.orientation, Orientation::Horizontal);
    }
}
