use std::sync::Arc;

use adaptive_styles::{
    DevicePixelGrid, RewriteOptions, ScalingFactors, StyleNode, StyleRewriter,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn deep_sheet() -> StyleNode {
    let mut sheet = StyleNode::new();
    for section in 0..32 {
        let mut card = StyleNode::new();
        card.set("width", 320.0);
        card.set("height", 180.0);
        card.set("paddingHorizontal", 12.0);
        card.set("paddingVertical", 8.0);
        card.set("borderRadius", 6.0);
        card.set("backgroundColor", "#202830");

        let mut label = StyleNode::new();
        label.set("fontSize", 14.0);
        label.set("lineHeight", 20.0);
        label.set("fontWeight", "bold");
        label.set("color", "#e8e8e8");
        card.set("label", label);

        let mut thumb = StyleNode::new();
        thumb.set("square", 64.0);
        thumb.set("marginLeft", 8.0);
        card.set("thumb", thumb);

        sheet.set(format!("card{section}"), card);
    }
    sheet
}

fn bench_rewrite(c: &mut Criterion) {
    let factors = ScalingFactors {
        width: 1.932,
        height: 1.871,
        average: 1.9015,
    };
    let grid = Arc::new(DevicePixelGrid::new(3.0).expect("grid"));
    let rewriter = StyleRewriter::new(factors, grid, RewriteOptions::default());
    let sheet = deep_sheet();

    c.bench_function("rewrite_deep_sheet", |b| {
        b.iter(|| {
            let mut working = sheet.clone();
            rewriter.rewrite(black_box(&mut working));
            working
        });
    });
}

criterion_group!(benches, bench_rewrite);
criterion_main!(benches);
