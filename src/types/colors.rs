string_enum! {
    /// Text and option colors used by annotations and select options.
    pub enum Color {
        Default => "default",
        Gray => "gray",
        Brown => "brown",
        Orange => "orange",
        Yellow => "yellow",
        Green => "green",
        Blue => "blue",
        Purple => "purple",
        Pink => "pink",
        Red => "red",
        GrayBackground => "gray_background",
        BrownBackground => "brown_background",
        OrangeBackground => "orange_background",
        YellowBackground => "yellow_background",
        GreenBackground => "green_background",
        BlueBackground => "blue_background",
        PurpleBackground => "purple_background",
        PinkBackground => "pink_background",
        RedBackground => "red_background",
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

impl Color {
    /// Check if this is a background color
    pub fn is_background(&self) -> bool {
        self.as_str().ends_with("_background")
    }
}
