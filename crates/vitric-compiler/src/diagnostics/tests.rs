use super::*;

#[test]
fn report_uses_fallback_message() {
    let mut diags = Diagnostics::new();
    diags
        .report(DiagnosticKind::UnsupportedType, "vt_thing")
        .emit();

    assert_eq!(diags.len(), 1);
    let d = diags.iter().next().unwrap();
    assert_eq!(d.kind, DiagnosticKind::UnsupportedType);
    assert_eq!(d.subject, "vt_thing");
    assert_eq!(d.message, "type uses unsupported language features");
    assert!(d.is_error());
}

#[test]
fn message_override() {
    let mut diags = Diagnostics::new();
    diags
        .report(DiagnosticKind::NotExportable, "kernel_arg")
        .message("type `matrix4x4` cannot be exported")
        .emit();

    let d = diags.iter().next().unwrap();
    assert_eq!(d.message, "type `matrix4x4` cannot be exported");
}

#[test]
fn severity_override() {
    let mut diags = Diagnostics::new();
    diags
        .report(DiagnosticKind::NotExportable, "x")
        .severity(Severity::Warning)
        .emit();

    assert!(!diags.has_errors());
    assert_eq!(diags.error_count(), 0);
    assert!(diags.iter().next().unwrap().is_warning());
}

#[test]
fn error_counting() {
    let mut diags = Diagnostics::new();
    assert!(diags.is_empty());
    assert!(!diags.has_errors());

    diags.report(DiagnosticKind::UnsupportedType, "a").emit();
    diags.report(DiagnosticKind::NotExportable, "b").emit();
    diags
        .report(DiagnosticKind::NotExportable, "c")
        .severity(Severity::Warning)
        .emit();

    assert_eq!(diags.len(), 3);
    assert_eq!(diags.error_count(), 2);
    assert!(diags.has_errors());
}

#[test]
fn extend_appends() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::UnsupportedType, "x").emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::NotExportable, "y").emit();

    a.extend(b);
    assert_eq!(a.len(), 2);
}

#[test]
fn render_one_line_per_diagnostic() {
    let mut diags = Diagnostics::new();
    diags
        .report(DiagnosticKind::UnsupportedTypeClass, "pixels")
        .message("type class `record` cannot be exported as a named element")
        .emit();

    assert_eq!(
        diags.render(),
        "error: `pixels`: type class `record` cannot be exported as a named element\n"
    );
}
