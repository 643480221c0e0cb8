use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Horizontal text alignment of a block
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Per-block visual properties. Every property is optional; unset properties
/// fall back to the renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
}

impl BlockStyles {
    /// Shallow merge: every property set in `update` overwrites the current
    /// value, everything else is kept.
    pub fn merge(&mut self, update: &BlockStyles) {
        fn take(slot: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }

        take(&mut self.background_color, &update.background_color);
        take(&mut self.background_image, &update.background_image);
        take(&mut self.text_color, &update.text_color);
        take(&mut self.font_size, &update.font_size);
        take(&mut self.font_weight, &update.font_weight);
        take(&mut self.font_family, &update.font_family);
        take(&mut self.padding, &update.padding);
        take(&mut self.margin, &update.margin);
        take(&mut self.border_radius, &update.border_radius);
        take(&mut self.border, &update.border);
        take(&mut self.min_height, &update.min_height);
        if update.text_align.is_some() {
            self.text_align = update.text_align;
        }
        take(&mut self.display, &update.display);
        take(&mut self.align_items, &update.align_items);
        take(&mut self.justify_content, &update.justify_content);
    }

    /// Set a single property by its camelCase name, as used by the style
    /// panel. Returns `false` for unknown names or an invalid alignment.
    pub fn set(&mut self, property: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match property {
            "backgroundColor" => &mut self.background_color,
            "backgroundImage" => &mut self.background_image,
            "textColor" => &mut self.text_color,
            "fontSize" => &mut self.font_size,
            "fontWeight" => &mut self.font_weight,
            "fontFamily" => &mut self.font_family,
            "padding" => &mut self.padding,
            "margin" => &mut self.margin,
            "borderRadius" => &mut self.border_radius,
            "border" => &mut self.border,
            "minHeight" => &mut self.min_height,
            "display" => &mut self.display,
            "alignItems" => &mut self.align_items,
            "justifyContent" => &mut self.justify_content,
            "textAlign" => {
                return match value.parse::<TextAlign>() {
                    Ok(align) => {
                        self.text_align = Some(align);
                        true
                    }
                    Err(_) => false,
                };
            }
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// CSS declarations for the properties that are set, in a fixed order.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = Vec::new();

        if let Some(bg) = &self.background_color {
            // Templates store gradients in the color slot
            let prop = if bg.contains("gradient(") {
                "background"
            } else {
                "background-color"
            };
            decls.push((prop, bg.clone()));
        }
        if let Some(img) = &self.background_image {
            decls.push(("background-image", img.clone()));
        }

        let plain = [
            ("color", &self.text_color),
            ("font-size", &self.font_size),
            ("font-weight", &self.font_weight),
            ("font-family", &self.font_family),
            ("padding", &self.padding),
            ("margin", &self.margin),
            ("border-radius", &self.border_radius),
            ("border", &self.border),
            ("min-height", &self.min_height),
        ];
        for (prop, value) in plain {
            if let Some(v) = value {
                decls.push((prop, v.clone()));
            }
        }

        if let Some(align) = self.text_align {
            decls.push(("text-align", align.to_string()));
        }

        let flex = [
            ("display", &self.display),
            ("align-items", &self.align_items),
            ("justify-content", &self.justify_content),
        ];
        for (prop, value) in flex {
            if let Some(v) = value {
                decls.push((prop, v.clone()));
            }
        }

        decls
    }
}
