use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    /// Every other page is tinted so page boundaries stay visible while scrolling.
    pub alternate_background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub code_background: Color32,
    pub code_foreground: Color32,
    pub toolbar_background: Color32,
    pub disabled: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub code_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            alternate_background: Color32::from_rgb(0x24, 0x24, 0x28),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            code_background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            code_foreground: Color32::from_rgb(0xD4, 0xD4, 0xD4),
            toolbar_background: Color32::from_rgb(0x14, 0x14, 0x14),
            disabled: Color32::from_rgb(0x5A, 0x5A, 0x5A),
            h1_size: 64.0,
            h2_size: 48.0,
            h3_size: 36.0,
            body_size: 28.0,
            code_size: 22.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            alternate_background: Color32::from_rgb(0xF6, 0xF7, 0xFA),
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            code_background: Color32::from_rgb(0xF0, 0xF0, 0xF0),
            code_foreground: Color32::from_rgb(0x33, 0x33, 0x33),
            toolbar_background: Color32::from_rgb(0xE8, 0xEA, 0xEE),
            disabled: Color32::from_rgb(0xB0, 0xB0, 0xB0),
            h1_size: 64.0,
            h2_size: 48.0,
            h3_size: 36.0,
            body_size: 28.0,
            code_size: 22.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Background for a page, alternating so neighbours are distinguishable.
    pub fn page_background(&self, page: usize) -> Color32 {
        if page % 2 == 0 {
            self.background
        } else {
            self.alternate_background
        }
    }

    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1 => self.h1_size,
            2 => self.h2_size,
            3 => self.h3_size,
            _ => self.body_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_is_light() {
        assert_eq!(Theme::from_name("solarized").name, "light");
        assert_eq!(Theme::from_name("dark").name, "dark");
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::light().toggled().name, "dark");
        assert_eq!(Theme::dark().toggled().name, "light");
    }

    #[test]
    fn heading_sizes_shrink_with_level() {
        let theme = Theme::dark();
        assert!(theme.heading_size(1) > theme.heading_size(2));
        assert!(theme.heading_size(2) > theme.heading_size(3));
        assert_eq!(theme.heading_size(5), theme.body_size);
    }

    #[test]
    fn pages_alternate() {
        let theme = Theme::light();
        assert_eq!(theme.page_background(0), theme.background);
        assert_eq!(theme.page_background(1), theme.alternate_background);
        assert_eq!(theme.page_background(2), theme.background);
    }
}
