mod command;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Command)] derive macro
// ============================================================================

/// Derive macro for the `Command` trait.
///
/// Generates a sibling struct holding every field except the provenance
/// field, and uses it as the command's `Unsourced` form. A `CommandSource`
/// takes that struct and fills the provenance field in with its own name.
///
/// # Usage
///
/// ```ignore
/// #[derive(Debug, Command)]
/// #[command(payload = "CreateDeck", derive(Debug, Clone))]
/// pub struct CreateDeckCommand {
///     pub source: String,
///     pub name: String,
/// }
///
/// // generated:
/// // #[derive(Debug, Clone)]
/// // pub struct CreateDeck { pub name: String }
/// ```
///
/// - `#[command(payload = "...")]` names the generated struct.
///   If omitted, defaults to the struct name + "Payload".
/// - `#[command(derive(...))]` lists derives applied to the generated struct.
/// - `#[command(source)]` marks the provenance field.
///   If omitted, defaults to a field named `source`. It must be a `String`;
///   any other type is rejected with a compile error on the field type.
#[proc_macro_derive(Command, attributes(command))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    command::derive_command(input)
}
