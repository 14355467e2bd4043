use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;

pub fn unique_fragment_names(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_fragment_definition_enter_handler(|ctx, frag| {
        if !ctx.known_fragment_names.insert(frag.name.to_string()) {
            ctx.report(ValidationError::DuplicateFragmentName {
                name: frag.name.to_string(),
            });
        }
    });
}
