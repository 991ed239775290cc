//! Anvil silhouette under the QR code.

use palette::Srgba;

use super::{LayerEffect, RenderContext};

/// Configuration for the anvil layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnvilConfig {
    pub ink: Srgba<u8>,
}

impl AnvilConfig {
    pub fn new(ink: Srgba<u8>) -> Self {
        Self { ink }
    }
}

impl LayerEffect for AnvilConfig {
    fn draw(&self, ctx: &mut RenderContext) {
        let anvil = ctx.layout.anvil;
        let canvas = &mut ctx.canvas;

        canvas.fill_rounded_rect(anvil.body, anvil.body_radius, self.ink);
        canvas.fill_polygon(&anvil.horn, self.ink);
        canvas.fill_rect(anvil.left_leg, self.ink);
        canvas.fill_rect(anvil.right_leg, self.ink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::layout::IconLayout;

    const BG: Srgba<u8> = Srgba::new(240, 240, 240, 255);
    const INK: Srgba<u8> = Srgba::new(0, 0, 0, 255);

    fn render() -> RenderContext {
        let layout = IconLayout::standard();
        let canvas = Canvas::new(layout.size, BG).unwrap();
        let mut ctx = RenderContext::new(canvas, layout);
        AnvilConfig::new(INK).draw(&mut ctx);
        ctx
    }

    fn is_ink(ctx: &RenderContext, x: u32, y: u32) -> bool {
        ctx.canvas.pixel(x, y).unwrap().0 == [0, 0, 0, 255]
    }

    #[test]
    fn body_is_filled_with_rounded_corners() {
        let ctx = render();

        assert!(is_ink(&ctx, 444, 580));
        assert!(is_ink(&ctx, 300, 535));
        // Top-left corner is cut by the radius
        assert!(!is_ink(&ctx, 288, 531));
        assert!(!is_ink(&ctx, 286, 580));
    }

    #[test]
    fn horn_narrows_to_tip() {
        let ctx = render();

        assert!(is_ink(&ctx, 610, 580));
        assert!(is_ink(&ctx, 730, 580));
        assert!(!is_ink(&ctx, 740, 580));
        // Above the horn's top edge near the tip
        assert!(!is_ink(&ctx, 720, 560));
    }

    #[test]
    fn legs_stand_under_body() {
        let ctx = render();

        assert!(is_ink(&ctx, 370, 700));
        assert!(is_ink(&ctx, 515, 700));
        // Gap between the legs
        assert!(!is_ink(&ctx, 440, 700));
        // Nothing under the horn
        assert!(!is_ink(&ctx, 600, 700));
        // Nothing below the legs
        assert!(!is_ink(&ctx, 370, 712));
    }
}
