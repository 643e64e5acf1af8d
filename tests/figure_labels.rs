use glam::dvec2;
use panelmark::{
    ErrorKind, FigureId, FigureOptions, Host, LabelError, LabelMode, LabelOptions, Location,
    MemoryHost, PanelId, PanelLabel, PanelOrder, PanelRect, Target, TextId, annotate, bigger,
    delete, label_figure, lower, reset_position, smaller, upper,
};

/// A 2 x 3 grid; returned panel ids are in row-major order (top-left first)
fn grid_2x3() -> (MemoryHost, FigureId, Vec<PanelId>) {
    let mut host = MemoryHost::new();
    let fig = host.add_figure();
    let panels = (1..=6).map(|i| host.subplot(fig, 2, 3, i).unwrap()).collect();
    (host, fig, panels)
}

fn texts(host: &MemoryHost, labels: &[PanelLabel<TextId>]) -> Vec<String> {
    labels.iter().map(|l| host.text(l.label()).unwrap()).collect()
}

fn panel_of(host: &MemoryHost, label: &PanelLabel<TextId>) -> PanelId {
    host.text_object(label.label()).unwrap().panel
}

#[test]
fn rightdown_labels_rows_first() {
    let (mut host, fig, panels) = grid_2x3();
    let labels = label_figure(&mut host, fig, LabelMode::LowerAlpha, &FigureOptions::default()).unwrap();

    assert_eq!(texts(&host, &labels), ["a", "b", "c", "d", "e", "f"]);
    let owners: Vec<PanelId> = labels.iter().map(|l| panel_of(&host, l)).collect();
    assert_eq!(owners, panels);
}

#[test]
fn downright_labels_columns_first() {
    let (mut host, fig, panels) = grid_2x3();
    let opts = FigureOptions::new().order(PanelOrder::DownRight);
    let labels = label_figure(&mut host, fig, LabelMode::LowerAlpha, &opts).unwrap();

    let owners: Vec<PanelId> = labels.iter().map(|l| panel_of(&host, l)).collect();
    // panels: [r0c0, r0c1, r0c2, r1c0, r1c1, r1c2]
    assert_eq!(
        owners,
        [panels[0], panels[3], panels[1], panels[4], panels[2], panels[5]]
    );
}

#[test]
fn one_label_per_panel() {
    let (mut host, fig, panels) = grid_2x3();
    let labels = label_figure(&mut host, fig, LabelMode::Decimal, &FigureOptions::default()).unwrap();
    assert_eq!(labels.len(), panels.len());
    for panel in panels {
        assert_eq!(host.texts_on(panel).len(), 1);
    }
}

#[test]
fn roman_modes() {
    let (mut host, fig, _) = grid_2x3();
    let labels = label_figure(&mut host, fig, LabelMode::UpperRoman, &FigureOptions::default()).unwrap();
    insta::assert_snapshot!(texts(&host, &labels).join(" "), @"I II III IV V VI");

    let (mut host, fig, _) = grid_2x3();
    let labels = label_figure(&mut host, fig, LabelMode::LowerRoman, &FigureOptions::default()).unwrap();
    insta::assert_snapshot!(texts(&host, &labels).join(" "), @"i ii iii iv v vi");
}

#[test]
fn letters_continue_past_twenty_six() {
    let mut host = MemoryHost::new();
    let fig = host.add_figure();
    for i in 1..=28 {
        host.subplot(fig, 4, 7, i).unwrap();
    }
    let labels = label_figure(&mut host, fig, LabelMode::UpperAlpha, &FigureOptions::default()).unwrap();
    let all = texts(&host, &labels);
    assert_eq!(&all[25..], ["Z", "AA", "AB"]);
}

#[test]
fn unknown_mode_is_invalid_argument() {
    let (mut host, fig, _) = grid_2x3();
    let err = annotate(&mut host, Target::Figure { figure: fig, mode: "x" }, &FigureOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(matches!(err, LabelError::UnknownMode { .. }));
    assert_eq!(host.live_texts(), 0);
}

#[test]
fn empty_figure_is_precondition_failure() {
    let mut host = MemoryHost::new();
    let fig = host.add_figure();
    let err = label_figure(&mut host, fig, LabelMode::UpperAlpha, &FigureOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
}

#[test]
fn refused_panel_rolls_back_the_batch() {
    let (mut host, fig, panels) = grid_2x3();
    host.lock_panel(panels[4]);
    let err = label_figure(&mut host, fig, LabelMode::UpperAlpha, &FigureOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Host);
    assert_eq!(host.live_texts(), 0);
    for panel in panels {
        assert!(!host.hold(panel).unwrap());
    }
}

#[test]
fn southeast_anchor() {
    let (mut host, fig, _) = grid_2x3();
    let opts = FigureOptions::parse("location = southeast, offset = 0.02").unwrap();
    let labels = label_figure(&mut host, fig, LabelMode::UpperAlpha, &opts).unwrap();
    for label in &labels {
        let spec = &host.text_object(label.label()).unwrap().spec;
        assert!((spec.position - dvec2(0.98, 0.02)).abs().max_element() < 1e-12);
        assert_eq!(spec.valign, panelmark::VAlign::Bottom);
        assert_eq!(spec.halign, panelmark::HAlign::Right);
    }
}

#[test]
fn options_are_forwarded_to_every_label() {
    let (mut host, fig, _) = grid_2x3();
    let opts = FigureOptions::parse(
        r#"fontsize = 10, fontweight = bold, color = red, backgroundcolor = white,
           edgecolor = black, margin = 3, prefix = "(", postfix = ")""#,
    )
    .unwrap();
    let labels = label_figure(&mut host, fig, LabelMode::Decimal, &opts).unwrap();
    assert_eq!(texts(&host, &labels)[2], "(3)");
    for label in &labels {
        let spec = &host.text_object(label.label()).unwrap().spec;
        assert_eq!(spec.font_size, 10.0);
        assert_eq!(spec.font_weight, panelmark::FontWeight::Bold);
        assert_eq!(spec.color, "red");
        assert_eq!(spec.background_color, "white");
        assert_eq!(spec.edge_color, "black");
        assert_eq!(spec.margin, 3.0);
        assert!(spec.clipping);
    }
}

#[test]
fn case_folding_is_idempotent() {
    let (mut host, fig, _) = grid_2x3();
    let opts = FigureOptions::new().label(LabelOptions::new().prefix("Panel ").location(Location::NorthEast));
    let labels = label_figure(&mut host, fig, LabelMode::LowerRoman, &opts).unwrap();

    upper(&mut host, &labels).unwrap();
    let upper_once = texts(&host, &labels);
    lower(&mut host, &labels).unwrap();
    let lower_once = texts(&host, &labels);
    upper(&mut host, &labels).unwrap();
    assert_eq!(texts(&host, &labels), upper_once);
    lower(&mut host, &labels).unwrap();
    assert_eq!(texts(&host, &labels), lower_once);
    assert_eq!(lower_once[3], "panel iv");
}

#[test]
fn bigger_then_smaller_restores_size() {
    let (mut host, fig, _) = grid_2x3();
    let labels = label_figure(&mut host, fig, LabelMode::UpperAlpha, &FigureOptions::default()).unwrap();
    for step in [1.0, 2.5, 0.25, 7.0, 0.1, 0.3] {
        bigger(&mut host, &labels, step).unwrap();
        smaller(&mut host, &labels, step).unwrap();
        for label in &labels {
            assert_eq!(host.font_size(label.label()).unwrap(), 14.0);
        }
    }
}

#[test]
fn reset_position_ignores_manual_moves() {
    let (mut host, fig, _) = grid_2x3();
    let opts = FigureOptions::parse("location = ne, offset = [0.05 0.1]").unwrap();
    let labels = label_figure(&mut host, fig, LabelMode::UpperAlpha, &opts).unwrap();
    for (i, label) in labels.iter().enumerate() {
        host.set_position(label.label(), dvec2(i as f64, -3.0)).unwrap();
        host.set_position(label.label(), dvec2(0.4, 0.4)).unwrap();
    }
    reset_position(&mut host, &labels).unwrap();
    for label in &labels {
        let expected = dvec2(
            panelmark::DOMAIN[label.limix().x()] + label.offset().x,
            panelmark::DOMAIN[label.limix().y()] + label.offset().y,
        );
        let pos = host.text_object(label.label()).unwrap().spec.position;
        assert_eq!(pos, expected);
        assert!((pos - dvec2(0.95, 0.9)).abs().max_element() < 1e-12);
    }
}

#[test]
fn delete_clears_whole_figure() {
    let (mut host, fig, _) = grid_2x3();
    let labels = label_figure(&mut host, fig, LabelMode::UpperAlpha, &FigureOptions::default()).unwrap();
    assert_eq!(host.live_texts(), 6);
    delete(&mut host, labels).unwrap();
    assert_eq!(host.live_texts(), 0);
}

#[test]
fn host_order_does_not_matter() {
    // Same layout as the grid, but panels added bottom-right first.
    let mut host = MemoryHost::new();
    let fig = host.add_figure();
    let mut panels: Vec<PanelId> = (1..=6).rev().map(|i| host.subplot(fig, 2, 3, i).unwrap()).collect();
    panels.reverse();
    let labels = label_figure(&mut host, fig, LabelMode::UpperAlpha, &FigureOptions::default()).unwrap();
    let owners: Vec<PanelId> = labels.iter().map(|l| panel_of(&host, l)).collect();
    assert_eq!(owners, panels);
}

#[test]
fn uneven_panels_use_top_left_corner() {
    let mut host = MemoryHost::new();
    let fig = host.add_figure();
    let wide_bottom = host.add_panel(fig, PanelRect::new(0.1, 0.1, 0.8, 0.35));
    let right_top = host.add_panel(fig, PanelRect::new(0.55, 0.55, 0.35, 0.35));
    let left_top = host.add_panel(fig, PanelRect::new(0.1, 0.55, 0.35, 0.35));
    let labels = label_figure(&mut host, fig, LabelMode::UpperAlpha, &FigureOptions::default()).unwrap();
    let owners: Vec<PanelId> = labels.iter().map(|l| panel_of(&host, l)).collect();
    assert_eq!(owners, [left_top, right_top, wide_bottom]);
}
