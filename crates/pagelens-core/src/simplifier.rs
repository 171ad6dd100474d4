//! Pipeline entry points.

use tracing::{debug, error, info};

use pagelens_dom::{Document, NodeId, RenderQuery};
use pagelens_protocols::{
    DomError, IdToBboxMap, InvisibleIdSet, SimplifiedPage, SimplifyError, SimplifyOptions,
};

use crate::annotations::collect_annotations;
use crate::cloner::clone_for_pruning;
use crate::identity::assign_identifiers;
use crate::pruning::{run_pipeline, PruneContext};
use crate::serializer::serialize;

/// Configured simplification pipeline.
///
/// ```ignore
/// let simplifier = Simplifier::new(SimplifyOptions::default());
/// let page = simplifier.simplify_page(&mut document, &renderer);
/// println!("{}", page.modified_html);
/// ```
#[derive(Debug, Clone)]
pub struct Simplifier {
    options: SimplifyOptions,
    viewport_only: bool,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new(SimplifyOptions::default())
    }
}

impl Simplifier {
    /// Create a simplifier restricted to the viewport.
    pub fn new(options: SimplifyOptions) -> Self {
        Self {
            options,
            viewport_only: true,
        }
    }

    /// Keep or drop elements outside the viewport.
    pub fn with_viewport_only(mut self, viewport_only: bool) -> Self {
        self.viewport_only = viewport_only;
        self
    }

    pub fn options(&self) -> &SimplifyOptions {
        &self.options
    }

    pub fn viewport_only(&self) -> bool {
        self.viewport_only
    }

    /// Simplify the subtree at `root`.
    ///
    /// With a geometry table every element under `root` gets an identifier
    /// on the live document and its box is recorded; entries are deleted as
    /// pruning drops their elements. Without one only the structural passes
    /// run, and viewport restriction is an error.
    pub fn simplify<R>(
        &self,
        live: &mut Document,
        render: &R,
        root: NodeId,
        mut bboxes: Option<&mut IdToBboxMap>,
    ) -> Result<String, SimplifyError>
    where
        R: RenderQuery + ?Sized,
    {
        if self.viewport_only && bboxes.is_none() {
            return Err(SimplifyError::MissingGeometry);
        }

        let mut invisible_ids = InvisibleIdSet::new();
        if let Some(table) = bboxes.as_deref_mut() {
            assign_identifiers(live, render, root, table, &mut invisible_ids)?;
        }

        let annotations = collect_annotations(live, render, root)?;
        let page = clone_for_pruning(live, root, &annotations)?;
        let mut context = PruneContext::new(page, bboxes);
        run_pipeline(
            &mut context,
            live,
            render,
            &invisible_ids,
            &self.options,
            self.viewport_only,
        )?;

        let html = serialize(context.document(), context.body());
        debug!(bytes = html.len(), "Serialized simplified tree");
        Ok(html)
    }

    /// [`simplify`](Self::simplify) behind a failure boundary.
    ///
    /// Errors are logged and yield an empty string; the geometry table is
    /// cleared so no partial result escapes.
    pub fn run<R>(
        &self,
        live: &mut Document,
        render: &R,
        root: NodeId,
        mut bboxes: Option<&mut IdToBboxMap>,
    ) -> String
    where
        R: RenderQuery + ?Sized,
    {
        match self.simplify(live, render, root, bboxes.as_deref_mut()) {
            Ok(html) => html,
            Err(e) => {
                error!(error = %e, "Error while getting simplified DOM");
                if let Some(table) = bboxes {
                    table.clear();
                }
                String::new()
            }
        }
    }

    /// Simplify the whole page body with a fresh geometry table.
    pub fn simplify_page<R>(&self, live: &mut Document, render: &R) -> SimplifiedPage
    where
        R: RenderQuery + ?Sized,
    {
        let Some(body) = live.body() else {
            let e = SimplifyError::from(DomError::MissingBody);
            error!(error = %e, "Error while getting simplified DOM");
            return SimplifiedPage::default();
        };

        let mut bboxes = IdToBboxMap::new();
        let modified_html = self.run(live, render, body, Some(&mut bboxes));
        info!(
            elements = bboxes.len(),
            bytes = modified_html.len(),
            "Simplified page"
        );
        SimplifiedPage {
            bboxes,
            modified_html,
        }
    }
}

#[cfg(test)]
#[path = "simplifier_tests.rs"]
mod tests;
