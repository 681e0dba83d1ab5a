///
/// Sanitizer
/// In-place coercion applied before a value is checked.
///

pub trait Sanitizer<T: ?Sized> {
    fn sanitize(&self, value: &mut T);
}

///
/// Trim
///

#[derive(Clone, Copy, Debug)]
pub struct Trim;

impl Sanitizer<String> for Trim {
    fn sanitize(&self, value: &mut String) {
        let trimmed = value.trim();

        if trimmed.len() != value.len() {
            *value = trimmed.to_owned();
        }
    }
}
