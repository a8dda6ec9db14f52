//! Internal identifiers of the host's released binary layout.
//!
//! These strings are the host's own class and field names, obfuscated as shipped. They are
//! kept in one table per release family so that a host release moving a field means one edit
//! here, not a hunt through strategy code.

/// Simple name of the internal class holding the entity type registry, both families.
pub const TYPE_REGISTRY_CLASS: &str = "EntityTypes";

/// Identifiers of the mapped family: parallel lookup maps kept as static fields of the
/// type-registry class.
pub mod mapped {
    /// Static field holding the save key → implementation class map.
    pub const NAME_TO_CLASS: &str = "c";
    /// Static field holding the implementation class → save key map.
    pub const CLASS_TO_NAME: &str = "d";
    /// Static field holding the numeric id → implementation class map.
    pub const ID_TO_CLASS: &str = "e";
    /// Static field holding the implementation class → numeric id map.
    pub const CLASS_TO_ID: &str = "f";
}

/// Identifiers of the keyed family: a single registration object and its backing collection.
pub mod keyed {
    /// Static field of the type-registry class holding the registration object.
    pub const REGISTRY: &str = "b";
    /// Instance field of the registration object holding the backing collection. The host has
    /// no removal entry point; unregistration edits this collection directly.
    pub const BACKING: &str = "c";
    /// Simple name of the host's namespaced key class.
    pub const KEY_CLASS: &str = "MinecraftKey";
}
