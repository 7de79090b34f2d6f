/// Product ids are integers, assigned by the store one past the maximum id
/// present in the document. Path parameters are coerced to this type before
/// any comparison.
pub type ProductId = i64;
