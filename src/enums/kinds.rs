//! Small kind/level enumerations.

enumeration! {
    /// Marks a construct as a reusable template or a concrete instance.
    pub enum ModelingKind {
        /// Software element describing the common features of a kind.
        Template = "TEMPLATE",
        /// Concrete, clearly identifiable component of a template.
        Instance = "INSTANCE",
    }
}

enumeration! {
    /// Whether an asset is a type or an instance.
    pub enum AssetKind {
        Type = "TYPE",
        Instance = "INSTANCE",
    }
}

enumeration! {
    /// Whether an entity is managed by its own asset administration shell.
    pub enum EntityType {
        /// No separate shell; the entity is managed inside the owning one.
        CoManagedEntity = "CO_MANAGED_ENTITY",
        /// The entity has its own shell and asset identifiers.
        SelfManagedEntity = "SELF_MANAGED_ENTITY",
    }
}

enumeration! {
    /// IEC 61360 level qualifier of a value.
    pub enum LevelType {
        Min = "MIN",
        Max = "MAX",
        Nom = "NOM",
        Type = "TYPE",
    }
}
