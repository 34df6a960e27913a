use gpl::parser::parse_line;
use gpl::registry;
use gpl::{
    Color, CountMismatch, DiagnosticKind, DrawOp, LineNumber, Point, Recorder, Session, Shape,
    Transcript,
};

fn session() -> Session<Recorder, Transcript> {
    Session::new(Recorder::new(), Transcript::default())
}

fn kinds(line: &str) -> Vec<DiagnosticKind> {
    parse_line(line, LineNumber::AdHoc).diagnostics.iter().map(|d| d.kind()).collect()
}

fn sample(usage: &str) -> String {
    usage
        .replace("{red|green|blue|cyan|magenta|yellow}", "green")
        .replace("{on|off}", "off")
        .replace("{x}", "10")
        .replace("{y}", "20")
        .replace("{width}", "30")
        .replace("{height}", "40")
        .replace("{radius}", "5")
        .replace("{side-length}", "6")
}

#[test]
fn every_usage_hint_is_a_valid_line() {
    for descriptor in registry::all() {
        let line = sample(descriptor.usage);
        let result = parse_line(&line, LineNumber::AdHoc);
        assert!(result.succeeded(), "{} -> {:?}", line, result.diagnostics);
        assert_eq!(result.kind, Some(descriptor.kind));
    }
}

#[test]
fn fewer_params_than_arity_is_insufficient() {
    for descriptor in registry::all().iter().filter(|d| d.arity > 1) {
        let line = format!("{} 1", descriptor.name);
        assert_eq!(
            kinds(&line),
            vec![DiagnosticKind::ParamCountMismatch(CountMismatch::Insufficient)],
            "{}",
            line
        );
    }
}

#[test]
fn more_params_than_arity_is_too_many() {
    for descriptor in registry::all() {
        let extra = vec!["1"; descriptor.arity + 1].join(",");
        let line = format!("{} {}", descriptor.name, extra);
        assert_eq!(
            kinds(&line),
            vec![DiagnosticKind::ParamCountMismatch(CountMismatch::TooMany)],
            "{}",
            line
        );
    }
}

#[test]
fn drawto_moves_pen() {
    let mut session = session();
    let outcome = session.execute_command("drawto 100, 100");
    assert!(outcome.line.succeeded());
    assert_eq!(session.pen().position, Point::new(100, 100));
}

#[test]
fn shapes_keep_the_color_they_were_drawn_with() {
    let mut session = session();
    session.run_program("pen red\nrectangle 10,10\npen blue\nrectangle 10,10");
    let colors: Vec<_> = session.surface().shapes().map(|s| s.color).collect();
    assert_eq!(colors, vec![Color::Red, Color::Blue]);
}

#[test]
fn clear_never_touches_pen() {
    let mut session = session();
    session.run_program("moveto 20,20\npen magenta\nrectangle 200,200\nclear");
    assert_eq!(session.pen().position, Point::new(20, 20));
    assert_eq!(session.pen().color, Color::Magenta);
    assert_eq!(session.surface().ops.last(), Some(&DrawOp::Clear));
}

#[test]
fn reset_then_draw_uses_origin() {
    let mut session = session();
    session.run_program("moveto 20,20\nrectangle 200,200\nclear\nreset\nrectangle 200,200");
    let origins: Vec<_> = session.surface().shapes().map(|s| s.origin).collect();
    assert_eq!(origins, vec![Point::new(20, 20), Point::ORIGIN]);
}

#[test]
fn fill_mode_follows_each_shape() {
    let mut session = session();
    session.run_program("fill on\nrectangle 50,50\nfill off\ntriangle 80");
    let shapes: Vec<_> = session.surface().shapes().map(|s| (s.shape, s.filled)).collect();
    assert_eq!(
        shapes,
        vec![
            (Shape::Rectangle { width: 50, height: 50 }, true),
            (Shape::Triangle { side: 80 }, false)
        ]
    );
}

#[test]
fn valid_program_runs_clean() {
    let mut session = session();
    let program = "moveto 100,100\npen cyan\nrectangle 100,100\nfill on\npen yellow\ncircle 20";
    let results = session.run_program(program);
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.succeeded()));
    assert_eq!(session.surface().shapes().count(), 2);
    assert!(session.reporter().advisories.is_empty());
}

#[test]
fn diagnostics_stay_on_their_line() {
    let mut session = session();
    let results = session.run_program("circle x\nmoveto 1\nclear");
    assert_eq!(results[0].diagnostics.len(), 1);
    assert_eq!(results[1].diagnostics.len(), 1);
    assert!(results[2].diagnostics.is_empty());
}

#[test]
fn nested_run_always_fails() {
    let mut session = session();
    for line in ["run", "RUN", "run now"] {
        let results = session.run_program(line);
        assert!(
            results[0]
                .diagnostics
                .iter()
                .any(|d| d.kind() == DiagnosticKind::NestedRunForbidden),
            "{}",
            line
        );
    }
}
