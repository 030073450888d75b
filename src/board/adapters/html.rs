//! HTML rendering of a board model.

use crate::board::domain::{BoardModel, CONFIGURE_PROMPT};
use minijinja::{Environment, context};
use thiserror::Error;

const BOARD_TEMPLATE_NAME: &str = "board.html";

const BOARD_TEMPLATE: &str = r#"<div class="kanban-board">
  <div class="container">
    <div class="ms-Grid-row row">
{%- for column in columns %}
      <div class="kanban-column ms-Grid-col {{ column_class }}" data-status="{{ column.status }}">
        <h3 class="ms-fontColor-themePrimary">{{ column.status }}</h3>
{%- for task in column.tasks %}
        <div class="task" data-taskid="{{ task.id }}">
          <div class="ms-fontSize-xl">{{ task.title }}</div>
        </div>
{%- endfor %}
      </div>
{%- endfor %}
    </div>
  </div>
</div>"#;

/// Errors raised while rendering board markup.
#[derive(Debug, Error)]
#[error("board template failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders boards to HTML with auto-escaped titles and statuses.
///
/// Columns carry `data-status` and tiles carry `data-taskid` so a
/// drag-and-drop layer can build [`crate::board::domain::DropEvent`]s from
/// the markup alone.
#[derive(Debug)]
pub struct HtmlBoardRenderer {
    environment: Environment<'static>,
}

impl HtmlBoardRenderer {
    /// Creates a renderer with the board template loaded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment.add_template(BOARD_TEMPLATE_NAME, BOARD_TEMPLATE)?;
        Ok(Self { environment })
    }

    /// Renders every column of `model` with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when template evaluation fails.
    pub fn render(&self, model: &BoardModel) -> Result<String, RenderError> {
        let template = self.environment.get_template(BOARD_TEMPLATE_NAME)?;
        let column_class = model.layout().grid_class().unwrap_or_default();
        Ok(template.render(context! {
            columns => model.columns(),
            column_class => column_class,
        })?)
    }

    /// Renders the prompt shown while the board is unconfigured.
    #[must_use]
    pub fn placeholder() -> String {
        format!("<div>{CONFIGURE_PROMPT}</div>")
    }
}
