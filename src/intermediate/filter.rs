/// Filter method of the IHDR chunk
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Filter method 0. See https://www.w3.org/TR/png-3/#9Filter-types
    /// Currently the only supported filter method
    #[default]
    Zero,
}

impl From<Filter> for u8 {
    fn from(value: Filter) -> Self {
        match value {
            Filter::Zero => 0,
        }
    }
}

/// Filter type byte leading every scanline. Only `None` is ever written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    None,
}

impl From<FilterKind> for u8 {
    fn from(value: FilterKind) -> Self {
        match value {
            FilterKind::None => 0,
        }
    }
}
