//! Engine-facing style application
//!
//! Each distinct style is registered with the engine once per session; every
//! later cell using the same handle reuses the memoized engine style id.

use super::{BorderEdge, Style, StyleHandle, Underline};
use crate::cell::{parse_cell_address, CellValue};
use crate::engine::{EngineStyleId, NativeBorder, NativeStyle, SpreadsheetEngine};
use crate::error::{Error, Result};

/// Applies registry handles and cell values to a [`SpreadsheetEngine`]
///
/// Holds no registry lock; the only synchronisation is the per-handle
/// one-time guard around engine registration, so a slow engine call only
/// blocks other users of the same handle.
#[derive(Debug)]
pub struct StyleApplier<'e, E: ?Sized> {
    engine: &'e E,
}

impl<'e, E: SpreadsheetEngine + ?Sized> StyleApplier<'e, E> {
    /// Create an applier for one engine session
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Attach `handle`'s style to the cell at `address` on `sheet`
    ///
    /// Returns the engine style id the cell now references. On an engine
    /// refusal the handle stays unregistered and can be applied again.
    pub fn apply(&self, handle: &StyleHandle, sheet: &str, address: &str) -> Result<EngineStyleId> {
        parse_cell_address(address)?;

        let id = self.engine_style_id(handle)?;
        self.engine
            .assign_style(sheet, address, id)
            .map_err(|source| Error::CellAssignment {
                address: address.to_string(),
                source,
            })?;

        log::trace!("{}!{} -> style {} ({})", sheet, address, handle.id(), id);
        Ok(id)
    }

    /// Engine style id for `handle`, registering the style on first use
    ///
    /// The first call binds the handle's registry to this engine's session.
    /// Handles from a registry bound to another engine are refused with
    /// [`Error::ForeignSession`] before any engine call.
    pub fn engine_style_id(&self, handle: &StyleHandle) -> Result<EngineStyleId> {
        let session = self.engine.session_id();
        let bound = *handle.session_cell().get_or_init(|| {
            log::debug!("style registry bound to engine {}", session);
            session
        });
        if bound != session {
            return Err(Error::ForeignSession {
                style: handle.id(),
                bound,
                engine: session,
            });
        }

        handle
            .engine_id_cell()
            .get_or_try_init(|| {
                let native = translate(handle.style());
                let id = self
                    .engine
                    .register_style(&native)
                    .map_err(|source| Error::EngineRejectedStyle {
                        style: handle.id(),
                        source,
                    })?;
                log::debug!("style {} registered with engine as {}", handle.id(), id);
                Ok(id)
            })
            .copied()
    }

    /// Store `value` in the cell at `address` on `sheet`
    pub fn write_value(&self, sheet: &str, address: &str, value: &CellValue) -> Result<()> {
        parse_cell_address(address)?;

        self.engine
            .write_value(sheet, address, value)
            .map_err(|source| Error::ValueWrite {
                address: address.to_string(),
                source,
            })?;

        log::trace!("{}!{} = {} ({})", sheet, address, value, value.type_name());
        Ok(())
    }
}

/// Translate a descriptor into the engine's flat representation
///
/// Only populated fields are carried; border edges without their own color
/// take the border's default color.
pub fn translate(style: &Style) -> NativeStyle {
    let font = &style.font;
    let fill = &style.fill;
    let border = &style.border;

    let edge = |edge: &Option<BorderEdge>| {
        edge.as_ref().map(|e| NativeBorder {
            style: e.style.as_str(),
            color: e.color.clone().or_else(|| border.color.clone()),
        })
    };

    NativeStyle {
        font_name: font.family.clone(),
        font_size: font.size,
        bold: font.bold,
        italic: font.italic,
        underline: (font.underline != Underline::None).then(|| font.underline.as_str()),
        font_color: font.color.clone(),
        fill_pattern: (!fill.is_none()).then(|| fill.pattern.as_str()),
        fill_color: fill.color.clone(),
        border_top: edge(&border.top),
        border_bottom: edge(&border.bottom),
        border_left: edge(&border.left),
        border_right: edge(&border.right),
        horizontal: style.alignment.horizontal.map(|h| h.as_str()),
        vertical: style.alignment.vertical.map(|v| v.as_str()),
        wrap_text: style.alignment.wrap_text,
        number_format: style.number_format.clone(),
        locked: style.protection.map(|p| p.locked),
        hidden: style.protection.map(|p| p.hidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineError, MemoryEngine};
    use crate::style::{BorderLineStyle, BorderStyle, StyleRegistry};
    use pretty_assertions::assert_eq;

    fn engine() -> MemoryEngine {
        let engine = MemoryEngine::new();
        engine.add_sheet("Sheet1").unwrap();
        engine
    }

    #[test]
    fn test_translate_only_populated_fields() {
        let native = translate(&Style::new().bold(true).font_size(12.0));
        assert_eq!(
            native,
            NativeStyle {
                bold: true,
                font_size: Some(12.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_translate_border_default_color() {
        let style = Style {
            border: BorderStyle::new()
                .with_top(BorderEdge::thin())
                .with_bottom(BorderEdge::colored(BorderLineStyle::Double, "#FF0000"))
                .with_color("#0000FF"),
            ..Default::default()
        };
        let native = translate(&style);

        assert_eq!(
            native.border_top,
            Some(NativeBorder {
                style: "thin",
                color: Some("#0000FF".into()),
            })
        );
        assert_eq!(
            native.border_bottom,
            Some(NativeBorder {
                style: "double",
                color: Some("#FF0000".into()),
            })
        );
        assert_eq!(native.border_left, None);
    }

    #[test]
    fn test_translate_fill_and_underline() {
        let native = translate(
            &Style::new()
                .fill_color("#FFFF00")
                .underline(Underline::Single),
        );
        assert_eq!(native.fill_pattern, Some("solid"));
        assert_eq!(native.fill_color.as_deref(), Some("#FFFF00"));
        assert_eq!(native.underline, Some("single"));
    }

    #[test]
    fn test_registers_once_per_handle() {
        let engine = engine();
        let registry = StyleRegistry::new();
        let applier = StyleApplier::new(&engine);
        let handle = registry.get_or_create(&Style::new().italic(true));

        assert_eq!(handle.engine_style_id(), None);
        let first = applier.apply(&handle, "Sheet1", "A1").unwrap();
        let second = applier.apply(&handle, "Sheet1", "A2").unwrap();

        assert_eq!(first, second);
        assert_eq!(handle.engine_style_id(), Some(first));
        assert_eq!(engine.registration_count(), 1);
        assert_eq!(engine.assignment_count(), 2);
    }

    #[test]
    fn test_invalid_address_makes_no_engine_call() {
        let engine = engine();
        let registry = StyleRegistry::new();
        let applier = StyleApplier::new(&engine);
        let handle = registry.get_or_create(&Style::new().bold(true));

        let err = applier.apply(&handle, "Sheet1", "1A").unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)));
        assert_eq!(engine.registration_count(), 0);
        assert_eq!(handle.engine_style_id(), None);
    }

    #[test]
    fn test_rejected_style_does_not_poison_handle() {
        let engine = engine();
        let registry = StyleRegistry::new();
        let applier = StyleApplier::new(&engine);
        let bad = registry.get_or_create(&Style::new().font_color("not-a-color"));

        for address in ["A1", "A2"] {
            match applier.apply(&bad, "Sheet1", address) {
                Err(Error::EngineRejectedStyle { style, source }) => {
                    assert_eq!(style, bad.id());
                    assert_eq!(source, EngineError::InvalidColor("not-a-color".into()));
                }
                other => panic!("expected rejection, got {:?}", other),
            }
        }
        assert_eq!(bad.engine_style_id(), None);
        assert_eq!(engine.cell_style("Sheet1", "A1"), None);

        // The registry still serves the same handle, and good styles are unaffected
        assert!(StyleHandle::ptr_eq(
            &bad,
            &registry.get_or_create(&Style::new().font_color("not-a-color"))
        ));
        let good = registry.get_or_create(&Style::new().font_color("#112233"));
        assert!(applier.apply(&good, "Sheet1", "A1").is_ok());
    }

    #[test]
    fn test_assignment_failure_keeps_registration() {
        let engine = engine();
        let registry = StyleRegistry::new();
        let applier = StyleApplier::new(&engine);
        let handle = registry.get_or_create(&Style::new().bold(true));

        let err = applier.apply(&handle, "Nope", "A1").unwrap_err();
        assert!(matches!(err, Error::CellAssignment { .. }));
        assert!(handle.engine_style_id().is_some());

        applier.apply(&handle, "Sheet1", "A1").unwrap();
        assert_eq!(engine.registration_count(), 1);
    }

    #[test]
    fn test_handle_refused_by_second_engine() {
        let first = engine();
        let second = engine();
        let registry = StyleRegistry::new();
        let bold = registry.get_or_create(&Style::new().bold(true));

        // Give the second engine a style of its own under the same id
        let italic = StyleRegistry::new().get_or_create(&Style::new().italic(true));
        let italic_id = StyleApplier::new(&second)
            .apply(&italic, "Sheet1", "A1")
            .unwrap();

        let bold_id = StyleApplier::new(&first).apply(&bold, "Sheet1", "A1").unwrap();
        assert_eq!(bold_id, italic_id);
        assert_eq!(registry.session(), Some(first.session_id()));

        let err = StyleApplier::new(&second)
            .apply(&bold, "Sheet1", "B1")
            .unwrap_err();
        match err {
            Error::ForeignSession { style, bound, engine } => {
                assert_eq!(style, bold.id());
                assert_eq!(bound, first.session_id());
                assert_eq!(engine, second.session_id());
            }
            other => panic!("expected foreign session, got {:?}", other),
        }
        assert_eq!(second.cell_style("Sheet1", "B1"), None);
        assert_eq!(second.registration_count(), 1);
        assert_eq!(second.assignment_count(), 1);

        // Other handles of the bound registry are refused too
        let other = registry.get_or_create(&Style::new().wrap_text(true));
        assert!(matches!(
            StyleApplier::new(&second).engine_style_id(&other),
            Err(Error::ForeignSession { .. })
        ));
        assert_eq!(other.engine_style_id(), None);
    }

    #[test]
    fn test_write_value() {
        let engine = engine();
        let applier = StyleApplier::new(&engine);

        applier
            .write_value("Sheet1", "C3", &CellValue::formula("SUM(A1:A2)"))
            .unwrap();
        assert_eq!(
            engine.cell_value("Sheet1", "C3"),
            CellValue::Formula("=SUM(A1:A2)".into())
        );

        assert!(matches!(
            applier.write_value("Sheet1", "C0", &CellValue::Empty),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            applier.write_value("Other", "C1", &CellValue::Empty),
            Err(Error::ValueWrite { .. })
        ));
    }
}
