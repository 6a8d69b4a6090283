/*!
 * # che2-subtitles - Worship subtitle sheet editor
 * 
 * A Rust library for composing the ordered subtitle lines of a worship
 * service and exporting them as a Word document.
 * 
 * ## Features
 * 
 * - Ordered subtitle list with reorder, edit and delete
 * - Optional vocal/instrumental part tags, color coded in the export
 * - Automatic text for a lone prelude or interlude selection
 * - Word (.docx) and plain text export
 * 
 * ## Architecture
 * 
 * The library is organized in these main modules:
 * - `parts`: The fixed part tag table
 * - `subtitle_list`: The ordered list of subtitle lines
 * - `compose`: Submission validation and the auto-text rule
 * - `document`: Styled-run rendering and output writers
 * - `session`: Session context, login and editor commands
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 * 
 * ## License
 * 
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod compose;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod parts;
pub mod session;
pub mod subtitle_list;

// Re-export main types for easier usage
pub use app_config::Config;
pub use compose::{auto_text, prepare_submission};
pub use document::{render_document, RenderInput, SubtitleDocument};
pub use errors::{AppError, ExportError, SessionError, SubmissionError};
pub use parts::PartTag;
pub use session::{SessionManager, SubtitleSession};
pub use subtitle_list::{SubtitleLine, SubtitleList};
