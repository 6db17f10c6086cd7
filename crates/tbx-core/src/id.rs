use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for box IDs — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Prefix of every allocated text-box id (`tb_0`, `tb_1`, ...).
pub const BOX_ID_PREFIX: &str = "tb";

/// A lightweight, interned identifier for text boxes.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxId(Spur);

impl BoxId {
    /// Intern a string as a BoxId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        BoxId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// The id for the `n`-th allocated box.
    pub fn nth(n: u64) -> Self {
        Self::intern(&format!("{BOX_ID_PREFIX}_{n}"))
    }
}

/// Monotonic id source. Lives beside the document, never inside it, so
/// restoring an older document snapshot cannot hand out an id twice.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id. Never returns the same id twice.
    pub fn allocate(&mut self) -> BoxId {
        let id = BoxId::nth(self.next);
        self.next += 1;
        id
    }

    /// How many ids have been handed out so far.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

impl fmt::Debug for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BoxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BoxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(BoxId::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = BoxId::intern("tb_7");
        let b = BoxId::intern("tb_7");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "tb_7");
    }

    #[test]
    fn allocator_counts_up_from_zero() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate().as_str(), "tb_0");
        assert_eq!(ids.allocate().as_str(), "tb_1");
        assert_eq!(ids.allocated(), 2);
    }

    #[test]
    fn separate_allocators_are_independent() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();
        a.allocate();
        assert_eq!(b.allocate().as_str(), "tb_0");
    }

    #[test]
    fn display_is_bare_id() {
        assert_eq!(BoxId::nth(3).to_string(), "tb_3");
        assert_eq!(format!("{:?}", BoxId::nth(3)), "#tb_3");
    }
}
