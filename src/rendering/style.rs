use crate::{data::event::MagnitudeBucket, MapError, Result};
use serde::{Deserialize, Serialize};

#[cfg(feature = "egui")]
use egui::Color32;

/// Serializable RGBA color that can convert to egui::Color32 and CSS strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(MapError::Config(format!("invalid color '{hex}'")));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| MapError::Config(format!("invalid color '{hex}'")))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the color with its alpha scaled by `opacity` (0.0 to 1.0)
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let alpha = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// CSS `rgba()` notation, used by the browser canvas surface
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

#[cfg(feature = "egui")]
impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Radius and fill for one magnitude bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Apparent radius on screen in device pixels
    pub radius: f64,
    pub fill: Color,
}

/// Palette and geometry used by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStyle {
    pub background: Color,
    pub grid: Color,
    pub grid_width: f64,
    pub landmass: Color,
    /// One entry per [`MagnitudeBucket`], ascending
    pub markers: [MarkerStyle; 6],
    pub highlight_outline: Color,
    pub highlight_outline_width: f64,
    pub search_ring: Color,
    pub search_ring_radius: f64,
    pub search_ring_width: f64,
    pub user_fill: Color,
    pub user_ring: Color,
    pub user_radius: f64,
    pub user_ring_width: f64,
    pub user_halo: Color,
    pub user_halo_radius: f64,
}

impl MapStyle {
    pub fn marker(&self, bucket: MagnitudeBucket) -> &MarkerStyle {
        &self.markers[bucket.index()]
    }

    /// Apparent marker radius in device pixels for a magnitude
    pub fn marker_radius(&self, magnitude: f64) -> f64 {
        self.marker(MagnitudeBucket::from_magnitude(magnitude)).radius
    }

    /// Every radius must be positive and radii must not shrink as magnitude grows
    pub fn validate(&self) -> Result<()> {
        let mut previous = 0.0;
        for (i, marker) in self.markers.iter().enumerate() {
            if !(marker.radius > 0.0) || marker.radius < previous {
                return Err(MapError::Config(format!(
                    "marker radius for bucket {i} must be positive and non-decreasing"
                )));
            }
            previous = marker.radius;
        }
        Ok(())
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x0f, 0x17, 0x2a),
            grid: Color::new(0x94, 0xa3, 0xb8, 0x33),
            grid_width: 1.0,
            landmass: Color::rgb(0x33, 0x41, 0x55),
            markers: [
                MarkerStyle { radius: 8.0, fill: Color::rgb(0x22, 0xc5, 0x5e) },
                MarkerStyle { radius: 10.0, fill: Color::rgb(0x84, 0xcc, 0x16) },
                MarkerStyle { radius: 12.0, fill: Color::rgb(0xea, 0xb3, 0x08) },
                MarkerStyle { radius: 16.0, fill: Color::rgb(0xf5, 0x9e, 0x0b) },
                MarkerStyle { radius: 20.0, fill: Color::rgb(0xea, 0x58, 0x0c) },
                MarkerStyle { radius: 24.0, fill: Color::rgb(0xdc, 0x26, 0x26) },
            ],
            highlight_outline: Color::WHITE,
            highlight_outline_width: 2.0,
            search_ring: Color::rgb(0x3b, 0x82, 0xf6),
            search_ring_radius: 14.0,
            search_ring_width: 3.0,
            user_fill: Color::rgb(0x25, 0x63, 0xeb),
            user_ring: Color::WHITE,
            user_radius: 7.0,
            user_ring_width: 2.0,
            user_halo: Color::new(0x25, 0x63, 0xeb, 0x33),
            user_halo_radius: 28.0,
        }
    }
}
