/// Self-description shared by the pipeline components.
pub trait Info {
    fn info(&self) -> String {
        type_label::<Self>()
    }
}

/// Short type name, without module path or generic parameters.
pub fn type_label<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

pub(crate) fn describe<T: ?Sized>(structure: &str) -> String {
    format!("{}: My major data structure is a {}", type_label::<T>(), structure)
}
