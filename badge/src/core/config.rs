//! Render configuration.
//!
//! Every field carries its own default, so a JSON file may override any
//! subset of them (`{"columns": 2}` is a complete config).

use serde::{Deserialize, Serialize};

use super::error::BadgeError;
use crate::render::layout::{checked_canvas_bounds, CardGeometry, DEFAULT_ORIGIN};
use crate::trophy::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub columns: u32,
    pub card_width: u32,
    pub card_height: u32,
    pub col_gap: u32,
    pub row_gap: u32,
    /// Metric value at which a progress bar is full.
    pub progress_scale: f64,
    /// Character budget for trophy labels and titles.
    pub max_label_chars: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            card_width: 120,
            card_height: 170,
            col_gap: 14,
            row_gap: 25,
            progress_scale: 50.0,
            max_label_chars: 22,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), BadgeError> {
        if self.columns == 0 {
            return Err(BadgeError::invalid_config("columns", "must be at least 1"));
        }
        if self.card_width == 0 {
            return Err(BadgeError::invalid_config("cardWidth", "must be positive"));
        }
        if self.card_height == 0 {
            return Err(BadgeError::invalid_config("cardHeight", "must be positive"));
        }
        if !self.progress_scale.is_finite() || self.progress_scale <= 0.0 {
            return Err(BadgeError::invalid_config(
                "progressScale",
                "must be a positive finite number",
            ));
        }
        if self.max_label_chars == 0 {
            return Err(BadgeError::invalid_config(
                "maxLabelChars",
                "must be at least 1",
            ));
        }

        let cards = Category::ALL.len();
        let geometry = CardGeometry::from_config(self);
        if checked_canvas_bounds(cards, self.columns, geometry, DEFAULT_ORIGIN).is_none() {
            return Err(BadgeError::invalid_config(
                "cardWidth",
                format!("a grid of {cards} cards does not fit a 32-bit canvas"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"columns": 2, "progressScale": 80}"#).unwrap();
        assert_eq!(config.columns, 2);
        assert_eq!(config.progress_scale, 80.0);
        assert_eq!(config.card_width, RenderConfig::default().card_width);
        assert_eq!(config.max_label_chars, 22);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let zero_columns = RenderConfig {
            columns: 0,
            ..RenderConfig::default()
        };
        assert!(zero_columns.validate().is_err());

        let bad_scale = RenderConfig {
            progress_scale: 0.0,
            ..RenderConfig::default()
        };
        assert!(bad_scale.validate().is_err());

        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_geometry_that_overflows_the_canvas() {
        let wide = RenderConfig {
            card_width: 1_500_000_000,
            ..RenderConfig::default()
        };
        assert!(matches!(
            wide.validate(),
            Err(BadgeError::InvalidConfig { .. })
        ));

        let tall_gaps = RenderConfig {
            columns: 1,
            row_gap: u32::MAX / 4,
            ..RenderConfig::default()
        };
        assert!(tall_gaps.validate().is_err());

        // Eight cards on one row still fit.
        let one_row = RenderConfig {
            columns: 8,
            card_width: 100_000,
            ..RenderConfig::default()
        };
        assert!(one_row.validate().is_ok());
    }
}
