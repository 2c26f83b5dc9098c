use super::{Client, ClientId, Cost, Facility, FacilityId, Problem};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded random problem where client `i` belongs to the cluster of facility
/// `i % facilities_size`. A connection cost inside the cluster is below 10, an opening cost is
/// below 100 and any cost outside the cluster is at least 1000, so every remembered cluster is
/// more cost-effective than any other group and one whole cluster is served per round.
pub fn create_clustered_problem(facilities_size: usize, clients_size: usize, seed: u64) -> Problem {
    let mut rng = SmallRng::seed_from_u64(seed);

    let facilities = (1..=facilities_size as FacilityId)
        .map(|id| Facility { id, opening_cost: rng.gen_range(10. ..100.) })
        .collect::<Vec<_>>();
    let clients = (1..=clients_size as ClientId).map(|id| Client { id }).collect::<Vec<_>>();
    let rows = (0..clients_size)
        .map(|client_idx| {
            (0..facilities_size)
                .map(|facility_idx| {
                    if client_idx % facilities_size == facility_idx {
                        rng.gen_range(1. ..10.)
                    } else {
                        rng.gen_range(1000. ..2000.)
                    }
                })
                .collect::<Vec<Cost>>()
        })
        .collect();

    Problem::from_matrix(facilities, clients, rows).unwrap_or_else(|err| panic!("cannot create problem: {err}"))
}
