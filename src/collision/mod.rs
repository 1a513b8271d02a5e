use crate::math::{point::Point, vector::Vector, FloatNum};

/// Strict half plane test against the directed edge (a, b).
///
/// A point exactly on the edge line counts as outside; the clip loop
/// relies on that to emit crossing points for coincident boundaries.
/// Polygon winding must be consistent (counter clockwise here).
pub fn is_point_inside_edge(a: &Point, b: &Point, p: &Point) -> bool {
    let pa: Vector = (p, a).into();
    let pb: Vector = (p, b).into();
    (pa ^ pb) > 0.
}

// crossing point of the lines carrying (a, b) and (c, d), together
// with its parameter ua along (a, b): crossing = a + ua * (b - a)
fn line_crossing(a: &Point, b: &Point, c: &Point, d: &Point) -> Option<(Point, FloatNum)> {
    let denominator: FloatNum =
        (c.y() - d.y()) * (a.x() - b.x()) - (c.x() - d.x()) * (a.y() - b.y());
    if denominator == 0. {
        return None;
    }
    let ua = ((d.x() - c.x()) * (a.y() - c.y()) - (d.y() - c.y()) * (a.x() - c.x())) / denominator;
    let ab: Vector = (a, b).into();
    Some((*a + ab * ua, ua))
}

/// Intersection point of the lines carrying (a, b) and (c, d).
///
/// Returns `None` when the lines are parallel or collinear (zero
/// denominator), so no non-finite coordinate can ever escape.
pub fn segment_intersection(a: &Point, b: &Point, c: &Point, d: &Point) -> Option<Point> {
    line_crossing(a, b, c, d).map(|(crossing, _)| crossing)
}

// one Sutherland-Hodgman pass: clip the working loop against the half
// plane of (a, b). The working loop keeps every line crossing, as the
// clip rule requires; the shared accumulator only takes crossings
// that actually lie on the (a, b) segment, so points on the clip line
// far outside the edge never count as boundary crossings.
fn clip_loop_by_edge(input: &[Point], a: &Point, b: &Point, crossings: &mut Vec<Point>) -> Vec<Point> {
    let mut output = Vec::with_capacity(input.len() + 1);
    let Some(mut s) = input.last().copied() else {
        return output;
    };
    let mut emit = |crossing: Point, ua: FloatNum, output: &mut Vec<Point>| {
        if (0. ..=1.).contains(&ua) {
            crossings.push(crossing);
        }
        output.push(crossing);
    };
    for &e in input {
        if is_point_inside_edge(a, b, &e) {
            if !is_point_inside_edge(a, b, &s) {
                if let Some((crossing, ua)) = line_crossing(a, b, &s, &e) {
                    emit(crossing, ua, &mut output);
                }
            }
            output.push(e);
        } else if is_point_inside_edge(a, b, &s) {
            if let Some((crossing, ua)) = line_crossing(a, b, &s, &e) {
                emit(crossing, ua, &mut output);
            }
        }
        s = e;
    }
    output
}

/// Every boundary crossing produced while progressively clipping
/// `other_loop` against each edge half plane of `self_loop`.
///
/// Each self edge clips the loop left over by the previous one, and
/// the crossings of every pass accumulate. The list is empty when
/// `other_loop` never touches a `self_loop` edge segment; in
/// particular an `other_loop` lying strictly inside `self_loop`
/// produces no crossing, so that containment direction is NOT
/// reported as intersection. The reverse direction is: clipping a
/// containing loop crosses the inner edge segments at their corners.
pub fn polygon_crossings(self_loop: &[Point], other_loop: &[Point]) -> Vec<Point> {
    let mut crossings: Vec<Point> = vec![];
    let mut working: Vec<Point> = other_loop.to_vec();
    for (i, a) in self_loop.iter().enumerate() {
        let b = &self_loop[(i + 1) % self_loop.len()];
        working = clip_loop_by_edge(&working, a, b, &mut crossings);
    }
    crossings
}

/// True iff the two vertex loops produce at least one boundary
/// crossing under progressive clipping.
pub fn polygon_overlap(self_loop: &[Point], other_loop: &[Point]) -> bool {
    !polygon_crossings(self_loop, other_loop).is_empty()
}
