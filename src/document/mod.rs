/*!
 * Document export for subtitle sheets.
 *
 * Rendering is split in two steps:
 * - `renderer` turns the session state into a styled-run `SubtitleDocument`
 * - `writers` serialize that model to bytes (Word `.docx`, plain text)
 */

pub mod model;
pub mod renderer;
pub mod writers;

pub use model::{Paragraph, Rgb, StyledRun, SubtitleDocument};
pub use renderer::{render_document, RenderInput};
pub use writers::{DocumentWriter, DocxWriter, PlainTextWriter};
