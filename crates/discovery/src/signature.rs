//! Canonical method-signature text used in `method` segments.
//!
//! The rendered form is `name(type, type, ...)` with parameter type names
//! joined by `", "`, which keeps overloads distinguishable inside one
//! identifier segment. Hosts must render parameter type names without
//! embedded commas for the reverse parse to be unambiguous.

use crucible_model::{MethodDecl, MethodHandle, TypeDecl};

/// Renders the segment value for a method.
pub fn method_signature(method: &dyn MethodDecl) -> String {
	let params = method
		.parameters()
		.iter()
		.map(|p| &*p.type_name)
		.collect::<Vec<_>>()
		.join(", ");
	format!("{}({params})", method.name())
}

/// Splits a rendered signature back into name and parameter type names.
///
/// Returns `None` for anything that is not of the canonical form.
pub fn parse_method_signature(spec: &str) -> Option<(&str, Vec<&str>)> {
	let open = spec.find('(')?;
	let inner = spec.strip_suffix(')')?.get(open + 1..)?;
	let name = &spec[..open];
	if name.is_empty() {
		return None;
	}
	let params = if inner.is_empty() {
		Vec::new()
	} else {
		inner.split(", ").collect()
	};
	Some((name, params))
}

/// Looks up a declared method from its rendered signature.
pub fn find_method(ty: &dyn TypeDecl, spec: &str) -> Option<MethodHandle> {
	let (name, params) = parse_method_signature(spec)?;
	ty.method(name, &params)
}
