//! In-memory implementation of the declared-element capability.
//!
//! Hosts describe their types, methods, and markers through the builder
//! specs here; the engine then discovers and resolves against the resulting
//! [`MemUniverse`] exactly as it would against a live introspection source.
//! Every test in this repository builds its fixtures this way too.

use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap;

use crate::element::{DeclUniverse, MethodDecl, MethodHandle, ParamDecl, TypeDecl, TypeHandle};
use crate::marker::{Marked, Marker};

/// Builder for one declared type, possibly with nested types.
///
/// For a top-level type the name is the fully qualified one
/// (`"demo.Outer"`); nested specs take the simple name and inherit the
/// `$`-joined qualified name from their parent.
#[derive(Debug, Clone)]
pub struct TypeSpec {
	name: Box<str>,
	is_static: bool,
	markers: Vec<Marker>,
	methods: Vec<MethodSpec>,
	nested: Vec<TypeSpec>,
}

impl TypeSpec {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			is_static: false,
			markers: Vec::new(),
			methods: Vec::new(),
			nested: Vec::new(),
		}
	}

	#[must_use]
	pub fn marker(mut self, marker: Marker) -> Self {
		self.markers.push(marker);
		self
	}

	/// Marks a nested type as not capturing its enclosing instance.
	#[must_use]
	pub fn static_nested(mut self) -> Self {
		self.is_static = true;
		self
	}

	#[must_use]
	pub fn method(mut self, method: MethodSpec) -> Self {
		self.methods.push(method);
		self
	}

	#[must_use]
	pub fn nested(mut self, nested: TypeSpec) -> Self {
		self.nested.push(nested);
		self
	}
}

/// Builder for one declared method.
#[derive(Debug, Clone)]
pub struct MethodSpec {
	name: Box<str>,
	markers: Vec<Marker>,
	params: Vec<ParamSpec>,
}

impl MethodSpec {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			markers: Vec::new(),
			params: Vec::new(),
		}
	}

	#[must_use]
	pub fn marker(mut self, marker: Marker) -> Self {
		self.markers.push(marker);
		self
	}

	#[must_use]
	pub fn param(mut self, param: ParamSpec) -> Self {
		self.params.push(param);
		self
	}
}

/// Builder for one formal parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
	name: Box<str>,
	type_name: Box<str>,
	markers: Vec<Marker>,
}

impl ParamSpec {
	pub fn new(name: impl Into<Box<str>>, type_name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			type_name: type_name.into(),
			markers: Vec::new(),
		}
	}

	#[must_use]
	pub fn marker(mut self, marker: Marker) -> Self {
		self.markers.push(marker);
		self
	}
}

/// In-memory universe of declared types, indexed by qualified name.
#[derive(Default)]
pub struct MemUniverse {
	types: FxHashMap<Box<str>, Arc<MemType>>,
}

impl MemUniverse {
	pub fn new() -> Self {
		Self::default()
	}

	/// Materializes a spec and registers it, nested types included, under
	/// their qualified names.
	pub fn define(&mut self, spec: TypeSpec) -> TypeHandle {
		let root = MemType::build(spec, None);
		self.index(&root);
		root
	}

	fn index(&mut self, ty: &Arc<MemType>) {
		self.types.insert(ty.qualified.clone(), ty.clone());
		for nested in &ty.nested {
			self.index(nested);
		}
	}
}

impl DeclUniverse for MemUniverse {
	fn type_by_name(&self, qualified_name: &str) -> Option<TypeHandle> {
		self.types
			.get(qualified_name)
			.map(|ty| ty.clone() as TypeHandle)
	}
}

struct MemType {
	qualified: Box<str>,
	simple: Box<str>,
	is_static: bool,
	markers: Vec<Marker>,
	enclosing: Weak<MemType>,
	methods: Vec<Arc<MemMethod>>,
	nested: Vec<Arc<MemType>>,
}

impl MemType {
	fn build(spec: TypeSpec, enclosing: Option<(&str, Weak<MemType>)>) -> Arc<MemType> {
		let TypeSpec {
			name,
			is_static,
			markers,
			methods,
			nested,
		} = spec;

		let (qualified, simple): (Box<str>, Box<str>) = match &enclosing {
			Some((parent_qualified, _)) => (format!("{parent_qualified}${name}").into(), name),
			None => {
				let simple = name.rsplit('.').next().unwrap_or(&name).into();
				(name, simple)
			}
		};

		Arc::new_cyclic(|me: &Weak<MemType>| {
			let methods = methods
				.into_iter()
				.map(|m| Arc::new(MemMethod::build(m, &qualified)))
				.collect();
			let nested = nested
				.into_iter()
				.map(|n| MemType::build(n, Some((&qualified, me.clone()))))
				.collect();

			MemType {
				qualified,
				simple,
				is_static,
				markers,
				enclosing: enclosing.map(|(_, weak)| weak).unwrap_or_default(),
				methods,
				nested,
			}
		})
	}
}

impl Marked for MemType {
	fn markers(&self) -> &[Marker] {
		&self.markers
	}
}

impl TypeDecl for MemType {
	fn qualified_name(&self) -> &str {
		&self.qualified
	}

	fn simple_name(&self) -> &str {
		&self.simple
	}

	fn enclosing_type(&self) -> Option<TypeHandle> {
		self.enclosing.upgrade().map(|ty| ty as TypeHandle)
	}

	fn is_static(&self) -> bool {
		self.is_static
	}

	fn methods(&self) -> Vec<MethodHandle> {
		self.methods
			.iter()
			.map(|m| m.clone() as MethodHandle)
			.collect()
	}

	fn nested_types(&self) -> Vec<TypeHandle> {
		self.nested
			.iter()
			.map(|ty| ty.clone() as TypeHandle)
			.collect()
	}
}

struct MemMethod {
	name: Box<str>,
	declaring: Box<str>,
	markers: Vec<Marker>,
	params: Vec<ParamDecl>,
}

impl MemMethod {
	fn build(spec: MethodSpec, declaring: &str) -> MemMethod {
		let declared_by: Box<str> = format!("{declaring}#{}", spec.name).into();
		let params = spec
			.params
			.into_iter()
			.enumerate()
			.map(|(index, p)| {
				let mut param = ParamDecl::new(p.name, p.type_name, index, declared_by.clone());
				param.markers = p.markers;
				param
			})
			.collect();

		MemMethod {
			name: spec.name,
			declaring: declaring.into(),
			markers: spec.markers,
			params,
		}
	}
}

impl Marked for MemMethod {
	fn markers(&self) -> &[Marker] {
		&self.markers
	}
}

impl MethodDecl for MemMethod {
	fn name(&self) -> &str {
		&self.name
	}

	fn declaring_type_name(&self) -> &str {
		&self.declaring
	}

	fn parameters(&self) -> &[ParamDecl] {
		&self.params
	}
}

#[cfg(test)]
mod tests {
	use super::{MemUniverse, MethodSpec, ParamSpec, TypeSpec};
	use crate::element::DeclUniverse;
	use crate::marker::{Marked, Marker};

	fn universe() -> MemUniverse {
		let mut universe = MemUniverse::new();
		universe.define(
			TypeSpec::new("demo.Outer")
				.marker(Marker::new("suite"))
				.method(
					MethodSpec::new("check")
						.marker(Marker::new("test"))
						.param(ParamSpec::new("info", "TestInfo")),
				)
				.method(MethodSpec::new("check").param(ParamSpec::new("n", "i32")))
				.nested(
					TypeSpec::new("Inner")
						.marker(Marker::new("nested"))
						.method(MethodSpec::new("works").marker(Marker::new("test"))),
				),
		);
		universe
	}

	#[test]
	fn test_qualified_names() {
		let universe = universe();
		let outer = universe.type_by_name("demo.Outer").unwrap();
		assert_eq!(outer.simple_name(), "Outer");

		let inner = universe.type_by_name("demo.Outer$Inner").unwrap();
		assert_eq!(inner.qualified_name(), "demo.Outer$Inner");
		assert_eq!(inner.simple_name(), "Inner");
	}

	#[test]
	fn test_enclosing_back_reference() {
		let universe = universe();
		let inner = universe.type_by_name("demo.Outer$Inner").unwrap();
		let enclosing = inner.enclosing_type().unwrap();
		assert_eq!(enclosing.qualified_name(), "demo.Outer");

		let outer = universe.type_by_name("demo.Outer").unwrap();
		assert!(outer.enclosing_type().is_none());
	}

	#[test]
	fn test_method_lookup_distinguishes_overloads() {
		let universe = universe();
		let outer = universe.type_by_name("demo.Outer").unwrap();

		let with_info = outer.method("check", &["TestInfo"]).unwrap();
		assert!(with_info.has_marker("test"));

		let with_int = outer.method("check", &["i32"]).unwrap();
		assert!(!with_int.has_marker("test"));

		assert!(outer.method("check", &["String"]).is_none());
		assert!(outer.method("missing", &[]).is_none());
	}

	#[test]
	fn test_param_declared_by() {
		let universe = universe();
		let outer = universe.type_by_name("demo.Outer").unwrap();
		let method = outer.method("check", &["TestInfo"]).unwrap();

		let param = &method.parameters()[0];
		assert_eq!(&*param.declared_by, "demo.Outer#check");
		assert_eq!(param.index, 0);
	}

	#[test]
	fn test_nested_type_lookup() {
		let universe = universe();
		let outer = universe.type_by_name("demo.Outer").unwrap();
		let inner = outer.nested_type("Inner").unwrap();
		assert_eq!(inner.qualified_name(), "demo.Outer$Inner");
		assert!(outer.nested_type("Absent").is_none());
	}
}
