//! Layout mirrors for the mapped release family.
//!
//! The registry class keeps four parallel lookup maps as separate static fields, each behind
//! the host's own lock. Registration inserts into every map; the host performs no
//! cross-map consistency checks of its own.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ClassHandle;

/// Save key → implementation class.
pub type NameToClass = RwLock<HashMap<String, ClassHandle>>;

/// Implementation class → save key.
pub type ClassToName = RwLock<HashMap<ClassHandle, String>>;

/// Numeric type id → implementation class.
pub type IdToClass = RwLock<HashMap<i32, ClassHandle>>;

/// Implementation class → numeric type id.
pub type ClassToId = RwLock<HashMap<ClassHandle, i32>>;
