//! Property tests for the exhaustive solver and permutation generators.

use std::collections::HashSet;

use proptest::prelude::*;
use u_route_exact::evaluation::{path_length, CostModel};
use u_route_exact::find_shortest_route;
use u_route_exact::models::{Customer, Location};
use u_route_exact::permutation::{factorial, permutations_of, Permutations};
use u_route_exact::solver::{solve_with_model, ExhaustiveSolver, SolverConfig};

/// Heap's algorithm, used as an enumeration independent of the solver's.
fn heap_orderings(n: usize) -> Vec<Vec<usize>> {
    fn recurse(k: usize, items: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k - 1 {
            recurse(k - 1, items, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
        recurse(k - 1, items, out);
    }

    let mut items: Vec<usize> = (0..n).collect();
    let mut out = Vec::new();
    recurse(n, &mut items, &mut out);
    out
}

fn origin_sum(origin: Location, stops: &[Customer]) -> u64 {
    let d0: Vec<u64> = stops.iter().map(|c| origin.distance_to(c.location())).collect();
    match d0.len() {
        0 => 0,
        n => 2 * d0.iter().sum::<u64>() - d0[n - 1],
    }
}

fn customers_strategy(max: usize) -> impl Strategy<Value = Vec<Customer>> {
    prop::collection::vec((-50i32..=50, -50i32..=50), 0..=max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Customer::new(format!("c{i}"), x, y))
            .collect()
    })
}

fn location_strategy() -> impl Strategy<Value = Location> {
    (-50i32..=50, -50i32..=50).prop_map(Location::from)
}

#[test]
fn heap_orderings_are_complete() {
    for n in 0..=6 {
        let all = heap_orderings(n);
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(all.len() as u64, factorial(n).expect("small n"));
        assert_eq!(unique.len(), all.len());
    }
}

proptest! {
    #[test]
    fn route_is_permutation_of_input(
        origin in location_strategy(),
        customers in customers_strategy(6),
    ) {
        let route = find_shortest_route(origin.x, origin.y, &customers);
        prop_assert_eq!(route.len(), customers.len());
        let mut got: Vec<&str> = route.names();
        let mut want: Vec<&str> = customers.iter().map(Customer::name).collect();
        got.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn legs_cost_matches_independent_minimum(
        origin in location_strategy(),
        customers in customers_strategy(6),
    ) {
        let route = find_shortest_route(origin.x, origin.y, &customers);
        let best = heap_orderings(customers.len())
            .iter()
            .map(|order| {
                let stops: Vec<Customer> = order.iter().map(|&i| customers[i].clone()).collect();
                path_length(origin, &stops)
            })
            .min()
            .unwrap_or(0);
        prop_assert_eq!(route.cost(), best);
        prop_assert_eq!(route.path_length(), best);
    }

    #[test]
    fn origin_sum_cost_matches_independent_minimum(
        origin in location_strategy(),
        customers in customers_strategy(6),
    ) {
        let route = solve_with_model(origin, &customers, CostModel::OriginSum);
        let best = heap_orderings(customers.len())
            .iter()
            .map(|order| {
                let stops: Vec<Customer> = order.iter().map(|&i| customers[i].clone()).collect();
                origin_sum(origin, &stops)
            })
            .min()
            .unwrap_or(0);
        prop_assert_eq!(route.cost(), best);
        // The legacy score never undercuts the travelled distance.
        prop_assert!(route.cost() >= route.path_length());
    }

    #[test]
    fn solver_is_deterministic(
        origin in location_strategy(),
        customers in customers_strategy(5),
    ) {
        let solver = ExhaustiveSolver::new(SolverConfig::default());
        let a = solver.solve(origin, &customers).expect("uncapped");
        let b = solver.solve(origin, &customers).expect("uncapped");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn lazy_and_recursive_generators_agree(n in 0usize..=6) {
        let items: Vec<usize> = (0..n).collect();
        let lazy: Vec<Vec<usize>> = Permutations::new(n).collect();
        prop_assert_eq!(lazy.len() as u64, factorial(n).expect("small n"));
        prop_assert_eq!(lazy, permutations_of(&items));
    }
}
