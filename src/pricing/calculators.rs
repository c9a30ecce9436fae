//! Core cost computation for tour quotes.
//!
//! Pure functions for quote math - no database access. Given the same
//! inputs these always produce the same breakdown; nothing here reads the
//! clock or any hidden state.

use rust_decimal::Decimal;

use super::models::{CostBreakdown, Party, ResolvedStop, TrainFare, TransportRate};

/// Round a currency amount up to the next whole unit.
///
/// Ceiling is the rounding rule anywhere currency division occurs: the
/// split never undercharges the package total.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tripquote_web::pricing::round_up;
///
/// assert_eq!(round_up(dec!(2333.33)), dec!(2334));
/// assert_eq!(round_up(dec!(3500)), dec!(3500));
/// ```
pub fn round_up(amount: Decimal) -> Decimal {
    amount.ceil()
}

/// Rooms required at double occupancy. An odd headcount takes a whole
/// extra room; the count never rounds down.
pub fn rooms_needed(headcount: i32) -> i32 {
    if headcount <= 0 {
        return 0;
    }
    (headcount + 1) / 2
}

/// Compute the full cost breakdown for an itinerary.
///
/// * Train: per-person fare x headcount x 2. A selected train is always a
///   round trip; one-way is not representable.
/// * Transport: per-day rate x total days summed across all stops, billed
///   for the whole trip rather than per stop.
/// * Hotel: selected meal-plan rate x nights x rooms, per stop. A stop
///   with no hotel (zero rate) or zero nights contributes nothing.
/// * Extra beds: nightly surcharge per extra occupant, per stop.
/// * Per-person: ceiling of subtotal / headcount; a zero headcount yields
///   zero rather than a division error.
pub fn compute_costs(
    stops: &[ResolvedStop],
    party: Party,
    train: Option<&TrainFare>,
    transport: Option<&TransportRate>,
) -> CostBreakdown {
    let headcount = party.headcount();

    let train_cost = match train {
        Some(fare) => fare.price_per_person * Decimal::from(headcount) * Decimal::from(2),
        None => Decimal::ZERO,
    };

    let total_days: i32 = stops.iter().map(|stop| stop.days).sum();
    let total_nights: i32 = stops.iter().map(|stop| stop.nights).sum();

    let transport_cost = match transport {
        Some(rate) => rate.price_per_day * Decimal::from(total_days),
        None => Decimal::ZERO,
    };

    let rooms = Decimal::from(rooms_needed(headcount));
    let mut hotel_cost = Decimal::ZERO;
    let mut extra_adult_cost = Decimal::ZERO;
    let mut extra_child_cost = Decimal::ZERO;

    for stop in stops {
        // No hotel selected means no room and no extra-bed charges at this
        // stop, even when extra occupants are present.
        if stop.nightly_rate <= Decimal::ZERO {
            continue;
        }
        let nights = Decimal::from(stop.nights);
        hotel_cost += stop.nightly_rate * nights * rooms;
        if party.extra_adults > 0 {
            extra_adult_cost += stop.extra_adult_rate * nights * Decimal::from(party.extra_adults);
        }
        if party.extra_children > 0 {
            extra_child_cost +=
                stop.extra_child_rate * nights * Decimal::from(party.extra_children);
        }
    }

    let subtotal = train_cost + transport_cost + hotel_cost + extra_adult_cost + extra_child_cost;
    let per_person_cost = if headcount > 0 {
        round_up(subtotal / Decimal::from(headcount))
    } else {
        Decimal::ZERO
    };

    CostBreakdown {
        train_cost,
        transport_cost,
        hotel_cost,
        extra_adult_cost,
        extra_child_cost,
        total_cost: subtotal,
        per_person_cost,
        total_days,
        total_nights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stop(nights: i32, days: i32, rate: Decimal) -> ResolvedStop {
        ResolvedStop {
            nights,
            days,
            nightly_rate: rate,
            extra_adult_rate: Decimal::ZERO,
            extra_child_rate: Decimal::ZERO,
        }
    }

    fn party(adults: i32, children: i32) -> Party {
        Party {
            num_adults: adults,
            num_children: children,
            extra_adults: 0,
            extra_children: 0,
        }
    }

    // ==================== round_up tests ====================

    #[test]
    fn test_round_up_fractional() {
        assert_eq!(round_up(dec!(2333.33)), dec!(2334));
        assert_eq!(round_up(dec!(0.01)), dec!(1));
    }

    #[test]
    fn test_round_up_whole_unchanged() {
        assert_eq!(round_up(dec!(3500)), dec!(3500));
        assert_eq!(round_up(Decimal::ZERO), Decimal::ZERO);
    }

    // ==================== rooms_needed tests ====================

    #[test]
    fn test_rooms_needed_double_occupancy() {
        assert_eq!(rooms_needed(1), 1);
        assert_eq!(rooms_needed(2), 1);
        assert_eq!(rooms_needed(3), 2);
        assert_eq!(rooms_needed(4), 2);
        assert_eq!(rooms_needed(5), 3);
    }

    #[test]
    fn test_rooms_needed_no_people() {
        assert_eq!(rooms_needed(0), 0);
        assert_eq!(rooms_needed(-1), 0);
    }

    // ==================== compute_costs tests ====================

    #[test]
    fn test_single_stop_map_plan() {
        // 2 adults, one 2-night stop at MAP 3500: one room, 7000 total,
        // 3500 per person.
        let stops = vec![stop(2, 3, dec!(3500))];
        let costs = compute_costs(&stops, party(2, 0), None, None);

        assert_eq!(costs.hotel_cost, dec!(7000));
        assert_eq!(costs.train_cost, Decimal::ZERO);
        assert_eq!(costs.transport_cost, Decimal::ZERO);
        assert_eq!(costs.total_cost, dec!(7000));
        assert_eq!(costs.per_person_cost, dec!(3500));
    }

    #[test]
    fn test_extra_adult_surcharge() {
        // 3 adults + 1 child need 2 rooms; the extra adult pays the
        // nightly mattress surcharge on top.
        let stops = vec![ResolvedStop {
            nights: 1,
            days: 1,
            nightly_rate: dec!(4000),
            extra_adult_rate: dec!(1000),
            extra_child_rate: dec!(600),
        }];
        let p = Party {
            num_adults: 3,
            num_children: 1,
            extra_adults: 1,
            extra_children: 0,
        };
        let costs = compute_costs(&stops, p, None, None);

        assert_eq!(costs.hotel_cost, dec!(8000));
        assert_eq!(costs.extra_adult_cost, dec!(1000));
        assert_eq!(costs.extra_child_cost, Decimal::ZERO);
        assert_eq!(costs.total_cost, dec!(9000));
        assert_eq!(costs.per_person_cost, dec!(2250));
    }

    #[test]
    fn test_extra_bed_charged_per_stop_per_night() {
        let stops = vec![
            ResolvedStop {
                nights: 2,
                days: 2,
                nightly_rate: dec!(3000),
                extra_adult_rate: dec!(800),
                extra_child_rate: dec!(500),
            },
            ResolvedStop {
                nights: 3,
                days: 3,
                nightly_rate: dec!(2500),
                extra_adult_rate: dec!(700),
                extra_child_rate: dec!(400),
            },
        ];
        let p = Party {
            num_adults: 2,
            num_children: 0,
            extra_adults: 1,
            extra_children: 2,
        };
        let costs = compute_costs(&stops, p, None, None);

        // 800*2 + 700*3 for the extra adult, nightly at each stop.
        assert_eq!(costs.extra_adult_cost, dec!(3700));
        // (500*2 + 400*3) * 2 children.
        assert_eq!(costs.extra_child_cost, dec!(4400));
    }

    #[test]
    fn test_round_trip_train() {
        // Delhi-Kalka sleeper at 850 for 2 people: 850 * 2 * 2 = 3400.
        let fare = TrainFare {
            price_per_person: dec!(850),
        };
        let costs = compute_costs(&[], party(2, 0), Some(&fare), None);

        assert_eq!(costs.train_cost, dec!(3400));
        assert_eq!(costs.total_cost, dec!(3400));
        assert_eq!(costs.per_person_cost, dec!(1700));
    }

    #[test]
    fn test_transport_billed_for_whole_trip() {
        let stops = vec![stop(1, 2, Decimal::ZERO), stop(2, 3, Decimal::ZERO)];
        let rate = TransportRate {
            price_per_day: dec!(2200),
        };
        let costs = compute_costs(&stops, party(4, 0), None, Some(&rate));

        assert_eq!(costs.total_days, 5);
        assert_eq!(costs.transport_cost, dec!(11000));
    }

    #[test]
    fn test_zero_night_stop_contributes_nothing() {
        // Sightseeing-only stop: hotel selected but no overnight stay.
        let stops = vec![stop(0, 1, dec!(5000)), stop(2, 2, dec!(3000))];
        let costs = compute_costs(&stops, party(2, 0), None, None);

        assert_eq!(costs.hotel_cost, dec!(6000));
        assert_eq!(costs.total_nights, 2);
        assert_eq!(costs.total_days, 3);
    }

    #[test]
    fn test_stop_without_hotel_skips_extra_beds() {
        let stops = vec![ResolvedStop {
            nights: 2,
            days: 2,
            nightly_rate: Decimal::ZERO,
            extra_adult_rate: dec!(1000),
            extra_child_rate: dec!(600),
        }];
        let p = Party {
            num_adults: 2,
            num_children: 0,
            extra_adults: 1,
            extra_children: 1,
        };
        let costs = compute_costs(&stops, p, None, None);

        assert_eq!(costs.hotel_cost, Decimal::ZERO);
        assert_eq!(costs.extra_adult_cost, Decimal::ZERO);
        assert_eq!(costs.extra_child_cost, Decimal::ZERO);
        assert_eq!(costs.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_zero_people_yields_zero_per_person() {
        let stops = vec![stop(2, 2, dec!(3500))];
        let costs = compute_costs(&stops, party(0, 0), None, None);

        assert_eq!(costs.per_person_cost, Decimal::ZERO);
        // Zero people also means zero rooms.
        assert_eq!(costs.hotel_cost, Decimal::ZERO);
    }

    #[test]
    fn test_per_person_rounds_up() {
        // 3 people with a 10000 subtotal: 3333.33... rounds up to 3334.
        let stops = vec![stop(1, 1, dec!(5000))];
        let costs = compute_costs(&stops, party(3, 0), None, None);

        // 2 rooms * 5000 = 10000.
        assert_eq!(costs.total_cost, dec!(10000));
        assert_eq!(costs.per_person_cost, dec!(3334));
    }

    #[test]
    fn test_children_count_toward_headcount() {
        let fare = TrainFare {
            price_per_person: dec!(500),
        };
        let costs = compute_costs(&[], party(2, 2), Some(&fare), None);

        // 4 heads round trip.
        assert_eq!(costs.train_cost, dec!(4000));
        assert_eq!(costs.per_person_cost, dec!(1000));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let stops = vec![
            ResolvedStop {
                nights: 2,
                days: 3,
                nightly_rate: dec!(3500),
                extra_adult_rate: dec!(900),
                extra_child_rate: dec!(450),
            },
            stop(1, 1, dec!(2750)),
        ];
        let p = Party {
            num_adults: 3,
            num_children: 2,
            extra_adults: 1,
            extra_children: 1,
        };
        let fare = TrainFare {
            price_per_person: dec!(1250),
        };
        let rate = TransportRate {
            price_per_day: dec!(1800),
        };

        let first = compute_costs(&stops, p, Some(&fare), Some(&rate));
        let second = compute_costs(&stops, p, Some(&fare), Some(&rate));
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_breakdown_sums_to_total() {
        let stops = vec![ResolvedStop {
            nights: 3,
            days: 4,
            nightly_rate: dec!(4000),
            extra_adult_rate: dec!(1000),
            extra_child_rate: dec!(500),
        }];
        let p = Party {
            num_adults: 4,
            num_children: 1,
            extra_adults: 1,
            extra_children: 1,
        };
        let fare = TrainFare {
            price_per_person: dec!(900),
        };
        let rate = TransportRate {
            price_per_day: dec!(2500),
        };
        let costs = compute_costs(&stops, p, Some(&fare), Some(&rate));

        assert_eq!(
            costs.total_cost,
            costs.train_cost
                + costs.transport_cost
                + costs.hotel_cost
                + costs.extra_adult_cost
                + costs.extra_child_cost
        );
        // 5 heads -> 3 rooms; 4000 * 3 nights * 3 rooms.
        assert_eq!(costs.hotel_cost, dec!(36000));
        // 900 * 5 * 2.
        assert_eq!(costs.train_cost, dec!(9000));
        // 2500 * 4 days.
        assert_eq!(costs.transport_cost, dec!(10000));
    }
}
