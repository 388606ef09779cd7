use serde::Deserialize;

/// Decorative layers painted behind the newsletter card. None of this
/// affects behavior. Colors are design tokens resolved as CSS variables,
/// opacities are percentages and spacing sizes are static-space tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct Effects {
    pub mask: Mask,
    pub gradient: Gradient,
    pub dots: Dots,
    pub grid: Grid,
    pub lines: Lines,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mask {
    pub cursor: bool,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gradient {
    pub display: bool,
    pub opacity: u8,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tilt: f64,
    pub color_start: String,
    pub color_end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dots {
    pub display: bool,
    pub opacity: u8,
    pub size: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Grid {
    pub display: bool,
    pub opacity: u8,
    pub color: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Lines {
    pub display: bool,
    pub opacity: u8,
    pub size: String,
    pub thickness: f64,
    pub angle: f64,
    pub color: String,
}

fn token(name: &str) -> String {
    format!("var(--{name})")
}

fn space(size: &str) -> String {
    format!("var(--static-space-{size})")
}

fn opacity(pct: u8) -> String {
    format!("{:.2}", f64::from(pct.min(100)) / 100.0)
}

impl Mask {
    pub fn style(&self) -> String {
        let mask = format!(
            "radial-gradient({}vh at {}% {}%, black 0%, transparent 100%)",
            self.radius, self.x, self.y
        );
        format!("mask-image:{mask};-webkit-mask-image:{mask};")
    }
}

impl Gradient {
    pub fn style(&self) -> Option<String> {
        self.display.then(|| {
            format!(
                "background:radial-gradient(ellipse {}% {}% at {}% {}%, {}, {});transform:rotate({}deg);opacity:{};",
                self.width,
                self.height,
                self.x,
                self.y,
                token(&self.color_start),
                token(&self.color_end),
                self.tilt,
                opacity(self.opacity),
            )
        })
    }
}

impl Dots {
    pub fn style(&self) -> Option<String> {
        self.display.then(|| {
            let size = space(&self.size);
            format!(
                "background-image:radial-gradient({} 1px, transparent 1px);background-size:{size} {size};opacity:{};",
                token(&self.color),
                opacity(self.opacity),
            )
        })
    }
}

impl Grid {
    pub fn style(&self) -> Option<String> {
        self.display.then(|| {
            let color = token(&self.color);
            format!(
                "background-image:linear-gradient(to right, {color} 1px, transparent 1px),linear-gradient(to bottom, {color} 1px, transparent 1px);background-size:{} {};opacity:{};",
                self.width,
                self.height,
                opacity(self.opacity),
            )
        })
    }
}

impl Lines {
    pub fn style(&self) -> Option<String> {
        self.display.then(|| {
            format!(
                "background-image:repeating-linear-gradient({}deg, {} 0 {}px, transparent {}px {});opacity:{};",
                self.angle,
                token(&self.color),
                self.thickness,
                self.thickness,
                space(&self.size),
                opacity(self.opacity),
            )
        })
    }
}

impl Effects {
    /// Inline styles for each enabled layer, bottom to top.
    pub fn layers(&self) -> Vec<String> {
        [
            self.gradient.style(),
            self.dots.style(),
            self.grid.style(),
            self.lines.style(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects() -> Effects {
        serde_json::from_str(
            r#"{
                "mask": { "cursor": true, "x": 50, "y": 0, "radius": 100 },
                "gradient": { "display": true, "opacity": 90, "x": 50, "y": 0, "width": 50,
                    "height": 50, "tilt": 0, "color_start": "accent-background-strong",
                    "color_end": "static-transparent" },
                "dots": { "display": true, "opacity": 20, "size": "2", "color": "brand-on-background-weak" },
                "grid": { "display": false, "opacity": 100, "color": "neutral-alpha-medium",
                    "width": "0.25rem", "height": "0.25rem" },
                "lines": { "display": false, "opacity": 100, "size": "16", "thickness": 1,
                    "angle": 90, "color": "neutral-alpha-medium" }
            }"#,
        )
        .expect("effects should parse")
    }

    #[test]
    fn test_disabled_layers_skipped() {
        let layers = effects().layers();
        assert_eq!(layers.len(), 2);
        assert!(layers[0].contains("var(--accent-background-strong)"));
        assert!(layers[0].contains("opacity:0.90;"));
        assert!(layers[1].contains("background-size:var(--static-space-2) var(--static-space-2)"));
        assert!(layers[1].contains("opacity:0.20;"));
    }

    #[test]
    fn test_all_layers() {
        let mut fx = effects();
        fx.grid.display = true;
        fx.lines.display = true;
        let layers = fx.layers();
        assert_eq!(layers.len(), 4);
        assert!(layers[2].contains("background-size:0.25rem 0.25rem"));
        assert!(layers[3].contains("repeating-linear-gradient(90deg"));
    }

    #[test]
    fn test_mask() {
        assert_eq!(
            effects().mask.style(),
            "mask-image:radial-gradient(100vh at 50% 0%, black 0%, transparent 100%);\
             -webkit-mask-image:radial-gradient(100vh at 50% 0%, black 0%, transparent 100%);"
        );
    }
}
