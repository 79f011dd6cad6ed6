use std::fmt;

/// Identity of the component being sized, used in every diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId {
    /// Object class, such as `Coil:Cooling:DX:SingleSpeed`.
    pub kind: String,

    /// User-assigned object name.
    pub name: String,
}

impl ComponentId {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.name)
    }
}

macro_rules! design_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

design_id!(
    /// Key of a zone's design-day sizing results.
    ZoneId
);
design_id!(
    /// Key of a primary air loop's design-day sizing results.
    AirLoopId
);
design_id!(
    /// Key of a dedicated outdoor air system.
    DoasId
);
design_id!(
    /// Key of a plant loop's sizing data.
    PlantLoopId
);
