use crucible_discovery::{Descriptor, DescriptorSource};
use crucible_extension::{ArgumentValue, CallbackResult, ExtensionContext};
use crucible_model::{CaseTestable, Marked, Marker};

/// Invocation capability, owned entirely by the execution driver.
///
/// The core resolves which member to call and with which arguments; the
/// driver performs the call and reports its outcome.
pub trait TestInvoker {
	fn invoke(&self, case: &CaseTestable, arguments: Vec<ArgumentValue>) -> CallbackResult;
}

/// Builds the context extensions see for one discovered node.
///
/// Tags come from `tag` markers on the node's declared element, one tag
/// per marker `name` attribute.
pub fn extension_context(descriptor: &Descriptor) -> ExtensionContext {
	let mut context = ExtensionContext::new(
		descriptor.unique_id.clone(),
		descriptor.display_name.clone(),
	);

	let markers: &[Marker] = match &descriptor.source {
		DescriptorSource::Engine => &[],
		DescriptorSource::Type(ty) => ty.markers(),
		DescriptorSource::Method { method, .. } => method.markers(),
	};
	for tag in markers
		.iter()
		.filter(|m| m.name() == "tag")
		.filter_map(|m| m.attr("name"))
	{
		context = context.with_tag(tag);
	}

	context
}
