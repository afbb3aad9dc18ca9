//! End-to-end synchronization tests driving a StatsTable from a PlotScene.

use ndarray::Array2;
use plotstat_core::{ItemKind, PlotScene};
use plotstat_stats::{StatValue, StatsHandler, StatsTable};

fn ramp(from: i64, to: i64) -> Vec<f64> {
    (from..to).map(|i| i as f64).collect()
}

fn curves_scene() -> PlotScene {
    let mut scene = PlotScene::new();
    scene.add_curve("curve0", ramp(0, 20), ramp(0, 20)).unwrap();
    scene.add_curve("curve1", ramp(0, 20), ramp(12, 32)).unwrap();
    scene.add_curve("curve2", ramp(0, 20), ramp(-2, 18)).unwrap();
    scene
}

#[test]
fn all_items_are_registered_on_rebind() {
    let scene = curves_scene();
    let mut table = StatsTable::new(StatsHandler::basics());
    table.rebind(&scene);
    assert_eq!(table.row_count(), 3);
}

#[test]
fn removing_items_drops_their_rows() {
    let mut scene = curves_scene();
    let mut table = StatsTable::default();
    table.rebind(&scene);
    scene.drain_events();

    scene.remove("curve2", ItemKind::Curve);
    table.process_events(&mut scene);
    assert_eq!(table.row_count(), 2);
    for row in table.rows() {
        assert!(["curve0", "curve1"].contains(&row.legend.as_str()));
    }

    scene.remove("curve0", ItemKind::Curve);
    table.process_events(&mut scene);
    assert_eq!(table.row_count(), 1);

    scene.remove("curve1", ItemKind::Curve);
    table.process_events(&mut scene);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn adding_an_item_appends_a_row() {
    let mut scene = curves_scene();
    let mut table = StatsTable::default();
    table.rebind(&scene);
    scene.drain_events();

    scene.add_curve("curve3", ramp(0, 10), ramp(0, 10)).unwrap();
    table.process_events(&mut scene);
    assert_eq!(table.row_count(), 4);
}

#[test]
fn re_adding_a_legend_updates_in_place() {
    let mut scene = curves_scene();
    let mut table = StatsTable::default();
    table.rebind(&scene);
    scene.drain_events();

    // same legend and kind: replaces the data, no fourth row
    scene.add_curve("curve0", ramp(0, 10), ramp(0, 10)).unwrap();
    table.process_events(&mut scene);

    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.value("curve0", ItemKind::Curve, "max"),
        Some(StatValue::Scalar(9.0))
    );
    assert_eq!(table.row_at(0).unwrap().legend, "curve0");
}

#[test]
fn set_data_updates_the_row() {
    let mut scene = curves_scene();
    let mut table = StatsTable::default();
    table.rebind(&scene);
    scene.drain_events();

    let data = plotstat_core::ItemData::curve(ramp(0, 4), ramp(0, 4)).unwrap();
    scene.set_data("curve0", data).unwrap();
    table.process_events(&mut scene);

    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.value("curve0", ItemKind::Curve, "max"),
        Some(StatValue::Scalar(3.0))
    );
}

#[test]
fn rebinding_another_scene_replaces_all_rows() {
    let scene = curves_scene();
    let mut table = StatsTable::default();
    table.rebind(&scene);
    assert_eq!(table.row_count(), 3);

    let mut other = PlotScene::new();
    other.add_curve("new curve", ramp(0, 26), ramp(0, 26)).unwrap();
    table.rebind(&other);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.row_at(0).unwrap().legend, "new curve");
}

#[test]
fn image_cells_match_the_raster() {
    let mut scene = PlotScene::new();
    let raster = Array2::from_shape_vec((128, 128), ramp(0, 128 * 128)).unwrap();
    scene.add_image("test image", raster).unwrap();

    let mut table = StatsTable::default();
    table.process_events(&mut scene);

    let row = table.row("test image", ItemKind::Image).unwrap();
    assert_eq!(row.value("min"), Some(StatValue::Scalar(0.0)));
    assert_eq!(row.value("max"), Some(StatValue::Scalar(16383.0)));
    assert_eq!(row.value("delta"), Some(StatValue::Scalar(16383.0)));
    assert_eq!(row.value("coords min").unwrap().to_string(), "(0, 0)");
    assert_eq!(row.value("coords max").unwrap().to_string(), "(127, 127)");
    // com needs paired coordinate/value semantics, images have none
    assert!(row.value("com").is_none());
}

#[test]
fn scatter_cells_match_the_points() {
    let mut scene = PlotScene::new();
    scene
        .add_scatter(
            "scatter plot",
            vec![0.0, 1.0, 2.0, 20.0, 50.0, 60.0],
            vec![2.0, 3.0, 4.0, 26.0, 69.0, 6.0],
            vec![5.0, 6.0, 7.0, 10.0, 90.0, 20.0],
        )
        .unwrap();

    let mut table = StatsTable::default();
    table.process_events(&mut scene);

    let row = table.row("scatter plot", ItemKind::Scatter).unwrap();
    assert_eq!(row.value("min"), Some(StatValue::Scalar(5.0)));
    assert_eq!(row.value("max"), Some(StatValue::Scalar(90.0)));
    assert_eq!(row.value("delta"), Some(StatValue::Scalar(85.0)));
    assert_eq!(row.value("coords min").unwrap().to_string(), "(0, 2)");
    assert_eq!(row.value("coords max").unwrap().to_string(), "(50, 69)");
}

#[test]
fn mixed_kinds_share_a_legend_without_colliding() {
    let mut scene = PlotScene::new();
    scene.add_curve("data", ramp(0, 5), ramp(0, 5)).unwrap();
    scene.add_image("data", Array2::zeros((3, 3))).unwrap();

    let mut table = StatsTable::default();
    table.process_events(&mut scene);

    assert_eq!(table.row_count(), 2);
    assert!(table.row("data", ItemKind::Curve).is_some());
    assert!(table.row("data", ItemKind::Image).is_some());
}

#[test]
fn net_row_count_follows_live_identities() {
    let mut scene = PlotScene::new();
    let mut table = StatsTable::default();

    scene.add_curve("A", ramp(0, 5), ramp(0, 5)).unwrap();
    scene.add_curve("B", ramp(0, 5), ramp(0, 5)).unwrap();
    scene.remove("A", ItemKind::Curve);
    table.process_events(&mut scene);

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.row_at(0).unwrap().legend, "B");
}
