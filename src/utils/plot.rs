/// Largest accepted plot width or height.
pub const MAX_PLOT_SIDE: usize = 1000;

/// Console grid for the parabola plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSize {
    pub width: usize,
    pub height: usize,
}

impl Default for PlotSize {
    fn default() -> Self {
        Self { width: 60, height: 20 }
    }
}

/// y = ax² + bx + c, or `None` when the value leaves i64.
fn eval_quadratic(a: i64, b: i64, c: i64, x: i64) -> Option<i64> {
    a.checked_mul(x)?
        .checked_mul(x)?
        .checked_add(b.checked_mul(x)?)?
        .checked_add(c)
}

/// Plots y = ax² + bx + c with the origin at the grid center, one row per string.
///
/// Columns cover x in `-width/2 .. width/2`; a point lands in row `height/2 - y`.
/// Points outside the grid are dropped.
pub fn plot_parabola(a: i64, b: i64, c: i64, size: PlotSize) -> Vec<String> {
    let PlotSize { width, height } = size;
    let mut graph = vec![vec![' '; width]; height];

    let half_w = (width / 2) as i64;
    let half_h = (height / 2) as i64;

    for x in -half_w..(width as i64 - half_w) {
        let Some(y) = eval_quadratic(a, b, c, x) else { continue };
        let gx = x + half_w;
        let Some(gy) = half_h.checked_sub(y) else { continue };

        if gx >= 0 && (gx as usize) < width && gy >= 0 && (gy as usize) < height {
            graph[gy as usize][gx as usize] = '*';
        }
    }

    graph.into_iter().map(|row| row.into_iter().collect()).collect()
}
