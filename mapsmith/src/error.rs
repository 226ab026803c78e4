/// Errors that can occur while rendering or writing a map document.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("could not render document: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("could not write output file: {0}")]
    Io(#[from] std::io::Error),
}
