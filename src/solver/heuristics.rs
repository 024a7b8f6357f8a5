use crate::config::HeuristicKind;
use crate::data::Pos;
use crate::map::GoalMap;
use crate::state::State;

pub(crate) type Cost = u32;

pub(crate) fn estimate(kind: HeuristicKind, map: &GoalMap, state: &State) -> Cost {
    // less is better
    match kind {
        HeuristicKind::Greedy => greedy_matching(&state.boxes, &map.goals),
        HeuristicKind::Optimal => optimal_matching(&state.boxes, &map.goals),
    }
}

/// Repeatedly takes the closest (box, goal) pair among the unassigned ones.
///
/// Order dependent and can overestimate compared to the optimal assignment.
fn greedy_matching(boxes: &[Pos], goals: &[Pos]) -> Cost {
    let mut free_boxes = boxes.to_vec();
    let mut free_goals = goals.to_vec();
    let mut sum = 0;

    while !free_boxes.is_empty() && !free_goals.is_empty() {
        let mut best = (Cost::max_value(), 0, 0);
        for (bi, &b) in free_boxes.iter().enumerate() {
            for (gi, &g) in free_goals.iter().enumerate() {
                let dist = b.dist(g);
                if dist < best.0 {
                    best = (dist, bi, gi);
                }
            }
        }
        let (dist, bi, gi) = best;
        sum += dist;
        free_boxes.swap_remove(bi);
        free_goals.swap_remove(gi);
    }

    sum
}

// Reference: Andrey Lopatin (https://cp-algorithms.com/graph/hungarian-algorithm.html).
/// Minimum total distance over all assignments of boxes to goals.
fn optimal_matching(boxes: &[Pos], goals: &[Pos]) -> Cost {
    const INF: i64 = i64::max_value() / 2;

    let n = boxes.len();
    let m = goals.len();
    if n == 0 || m == 0 {
        return 0;
    }
    debug_assert!(n <= m, "more boxes than goals");
    let cost = |i: usize, j: usize| i64::from(boxes[i - 1].dist(goals[j - 1]));

    // 1-indexed with a dummy 0 element
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; m + 1];
    let mut p = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0;
        let mut minv = vec![INF; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = INF;
            let mut j1 = 0;

            for j in 1..=m {
                if !used[j] {
                    let cur = cost(i0, j) - u[i0] - v[j];
                    if cur < minv[j] {
                        minv[j] = cur;
                        way[j] = j0;
                    }
                    if minv[j] < delta {
                        delta = minv[j];
                        j1 = j;
                    }
                }
            }

            for j in 0..=m {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    (1..=m)
        .filter(|&j| p[j] != 0)
        .map(|j| cost(p[j], j) as Cost)
        .sum()
}
