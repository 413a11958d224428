use crate::foundation::core::{Rect, rect_xywh};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
    /// First item at the start, last at the end, remaining space shared between items.
    SpaceBetween,
}

/// Offset that places `content` inside `container` per `align`. Never negative.
pub fn align_offset(container: f64, content: f64, align: Align) -> f64 {
    let rem = (container - content).max(0.0);
    match align {
        Align::Start => 0.0,
        Align::Center => rem * 0.5,
        Align::End => rem,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// One box in a stack: its size and the margin that follows it along the main axis.
pub struct Item {
    pub width: f64,
    pub height: f64,
    pub gap_after: f64,
}

impl Item {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            gap_after: 0.0,
        }
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap_after = gap;
        self
    }
}

fn main_offsets(avail: f64, sizes: &[(f64, f64)], justify: Justify) -> Vec<f64> {
    let total: f64 = sizes.iter().map(|(s, _)| *s).sum::<f64>()
        + sizes
            .iter()
            .take(sizes.len().saturating_sub(1))
            .map(|(_, g)| *g)
            .sum::<f64>();
    let rem = (avail - total).max(0.0);
    let (mut pos, between) = match justify {
        Justify::Start => (0.0, 0.0),
        Justify::Center => (rem * 0.5, 0.0),
        Justify::End => (rem, 0.0),
        Justify::SpaceBetween if sizes.len() > 1 => (0.0, rem / (sizes.len() - 1) as f64),
        Justify::SpaceBetween => (0.0, 0.0),
    };
    let mut out = Vec::with_capacity(sizes.len());
    for (size, gap) in sizes {
        out.push(pos);
        pos += size + gap + between;
    }
    out
}

/// Column layout inside `region`; returns one frame per item.
pub fn vstack(region: Rect, items: &[Item], justify: Justify, align: Align) -> Vec<Rect> {
    let sizes: Vec<(f64, f64)> = items.iter().map(|i| (i.height, i.gap_after)).collect();
    main_offsets(region.height(), &sizes, justify)
        .into_iter()
        .zip(items)
        .map(|(dy, item)| {
            let w = item.width.min(region.width());
            let dx = align_offset(region.width(), w, align);
            rect_xywh(region.x0 + dx, region.y0 + dy, w, item.height)
        })
        .collect()
}

/// Row layout inside `region`; returns one frame per item.
pub fn hstack(region: Rect, items: &[Item], justify: Justify, align: Align) -> Vec<Rect> {
    let sizes: Vec<(f64, f64)> = items.iter().map(|i| (i.width, i.gap_after)).collect();
    main_offsets(region.width(), &sizes, justify)
        .into_iter()
        .zip(items)
        .map(|(dx, item)| {
            let dy = align_offset(region.height(), item.height, align);
            rect_xywh(region.x0 + dx, region.y0 + dy, item.width, item.height)
        })
        .collect()
}

/// `rect` shrunk by `pad` on every side.
pub fn inset(rect: Rect, pad: f64) -> Rect {
    inset_xy(rect, pad, pad)
}

pub fn inset_xy(rect: Rect, px: f64, py: f64) -> Rect {
    Rect::new(
        rect.x0 + px,
        rect.y0 + py,
        (rect.x1 - px).max(rect.x0 + px),
        (rect.y1 - py).max(rect.y0 + py),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
