/// Indirect object number. Freshly generated documents never reuse
/// object slots, so the generation number is always 0 and only the
/// number is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjId(pub u32);

/// The subset of PDF object types this generator emits
/// (PDF 32000-1:2008, section 7.3).
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Real(f64),
    /// Name object, stored without the leading `/`. Every name we
    /// emit is a compile-time constant.
    Name(&'static str),
    /// Literal string, stored unescaped.
    Text(String),
    Array(Vec<Object>),
    /// Key-value pairs; a Vec keeps output order deterministic.
    Dict(Vec<(&'static str, Object)>),
    Stream {
        dict: Vec<(&'static str, Object)>,
        data: Vec<u8>,
    },
    Ref(ObjId),
}

impl Object {
    pub fn text(s: impl Into<String>) -> Self {
        Object::Text(s.into())
    }

    pub fn dict(entries: Vec<(&'static str, Object)>) -> Self {
        Object::Dict(entries)
    }

    pub fn stream(dict: Vec<(&'static str, Object)>, data: Vec<u8>) -> Self {
        Object::Stream { dict, data }
    }
}
