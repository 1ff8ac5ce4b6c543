/// Image inline type with owned syntax constants.
///
/// Images are the only bracketed construct: `![alt](href)`. The resolver
/// only commits after the full form has been scanned; any shortfall rolls
/// the cursor back to just after [`Image::BANG_BRACKET`].
pub struct Image;

impl Image {
    /// The trigger character that starts image syntax.
    pub const BANG: char = '!';
    /// Opens the alt text.
    pub const ALT_OPEN: char = '[';
    /// Closes the alt text.
    pub const ALT_CLOSE: char = ']';
    /// Opens the href.
    pub const HREF_OPEN: char = '(';
    /// Closes the href.
    pub const HREF_CLOSE: char = ')';
    /// The literal prefix emitted when a scanned image fails to complete.
    pub const BANG_BRACKET: &'static str = "![";
}
