use polypack::entities::{Canvas, Layout};
use polypack::geometry::primitives::Rect;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Renders a layout, with the y-axis pointing up.
pub fn layout_to_svg(
    layout: &Layout,
    canvas: &Canvas,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let layout_bbox = layout.bbox().ok();
    let content_bbox = match layout_bbox {
        Some(bbox) => Rect::bounding_rect(bbox, canvas.bbox),
        None => canvas.bbox,
    };
    let vbox = content_bbox.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        (f64::min(vbox.width(), vbox.height()) * 0.001) as f32 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the top left of the content
        let font_size = (f64::min(vbox.width(), vbox.height()) * 0.025) as f32;
        let label_content = format!(
            "bounding area: {:.3} | placed: {} | {}",
            layout.bounding_area(),
            layout.len(),
            title,
        );
        //the label lives outside the flipped group, so its y-coordinate is mirrored
        Text::new(label_content)
            .set("x", content_bbox.x_min as f32)
            .set("y", -content_bbox.y_max as f32 - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let mut flipped = Group::new()
        .set("id", "layout")
        .set("transform", "scale(1 -1)");

    if options.draw_canvas {
        let bbox = canvas.bbox;
        flipped = flipped.add(
            Group::new()
                .set("id", "canvas")
                .add(svg_util::data_to_path(
                    svg_util::aa_rect_data(bbox),
                    &[
                        ("fill", &*format!("{}", theme.canvas_fill)),
                        ("fill-opacity", "0.3"),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                    ],
                ))
                .add(Title::new(format!(
                    "canvas, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
                    bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
                ))),
        );
    }

    let items_group = layout
        .placed()
        .iter()
        .fold(Group::new().set("id", "items"), |group, pp| {
            let (dx, dy) = pp.offset().offset();
            group.add(
                svg_util::data_to_path(
                    svg_util::simple_polygon_data(pp.shape()),
                    &[
                        ("fill", &*format!("{}", theme.item_fill)),
                        ("fill-opacity", &*format!("{}", theme.item_fill_opacity)),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                        ("stroke-linejoin", "round"),
                    ],
                )
                .add(Title::new(format!(
                    "item, id: {}, offset: ({dx:.3}, {dy:.3})",
                    pp.item_id
                ))),
            )
        });
    flipped = flipped.add(items_group);

    if let (true, Some(bbox)) = (options.draw_bbox, layout_bbox) {
        flipped = flipped.add(
            svg_util::data_to_path(
                svg_util::aa_rect_data(bbox),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.bbox_stroke)),
                    ("stroke-width", &*format!("{stroke_width}")),
                    (
                        "stroke-dasharray",
                        &*format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width),
                    ),
                ],
            )
            .add(Title::new(format!(
                "bounding box, width: {:.3}, height: {:.3}",
                bbox.width(),
                bbox.height()
            ))),
        );
    }

    //the flipped group maps y to -y, so the view box covers [-y_max, -y_min]
    let vbox_svg = (
        vbox.x_min as f32,
        -vbox.y_max as f32,
        vbox.width() as f32,
        vbox.height() as f32,
    );

    Document::new()
        .set("viewBox", vbox_svg)
        .add(flipped)
        .add(label)
}
