//! The filter engine.

use super::Specification;

/// Yields the items that satisfy `spec`, in their original order.
///
/// The result is lazy: nothing is evaluated until it is iterated, and each
/// item is tested exactly once per pass. It is also `Clone`, so a cloned
/// iterator replays the same scan and yields the same items.
pub fn filter<'a, 's, T, S, I>(items: I, spec: &'s S) -> impl Iterator<Item = &'a T> + Clone + 's
where
    'a: 's,
    T: 'a,
    S: Specification<T> + ?Sized + 's,
    I: IntoIterator<Item = &'a T> + 's,
    I::IntoIter: Clone + 's,
{
    items.into_iter().filter(move |item| spec.is_satisfied(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_catalog, Color, Product, Size};
    use crate::specification::{all_of, and, Matching, ProductSpec};

    fn names<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(|p| p.name()).collect()
    }

    #[test]
    fn filters_green_products() {
        let products = sample_catalog();
        let green = ProductSpec::Color(Color::Green);
        assert_eq!(names(filter(&products, &green)), ["apple", "tree"]);
    }

    #[test]
    fn filters_large_products() {
        let products = sample_catalog();
        let large = ProductSpec::Size(Size::Large);
        assert_eq!(names(filter(&products, &large)), ["tree", "house"]);
    }

    #[test]
    fn filters_blue_and_large() {
        let products = sample_catalog();
        let spec = and(ProductSpec::Color(Color::Blue), ProductSpec::Size(Size::Large));
        assert_eq!(names(filter(&products, &spec)), ["house"]);
    }

    #[test]
    fn red_and_small_matches_nothing() {
        let products = sample_catalog();
        let spec = and(ProductSpec::Color(Color::Red), ProductSpec::Size(Size::Small));
        assert_eq!(filter(&products, &spec).count(), 0);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let products: Vec<Product> = Vec::new();
        let anything = all_of(Vec::<ProductSpec>::new());
        assert_eq!(filter(&products, &anything).count(), 0);
    }

    #[test]
    fn empty_conjunction_keeps_every_item() {
        let products = sample_catalog();
        let anything = all_of(Vec::<ProductSpec>::new());
        assert_eq!(names(filter(&products, &anything)), ["apple", "tree", "house"]);
    }

    #[test]
    fn conjunction_equals_ordered_intersection() {
        let products = vec![
            Product::new("a", Color::Red, Size::Small),
            Product::new("b", Color::Blue, Size::Large),
            Product::new("c", Color::Red, Size::Large),
            Product::new("d", Color::Green, Size::Medium),
            Product::new("e", Color::Red, Size::Large),
        ];

        for color in Color::ALL {
            for size in Size::ALL {
                let p = ProductSpec::Color(color);
                let q = ProductSpec::Size(size);
                let by_q: Vec<_> = filter(&products, &q).collect();
                let intersection: Vec<_> = filter(&products, &p)
                    .filter(|item| by_q.contains(item))
                    .collect();
                let combined: Vec<_> = filter(&products, &and(p, q)).collect();
                assert_eq!(combined, intersection, "{} & {}", color, size);
            }
        }
    }

    #[test]
    fn preserves_relative_order() {
        let products = sample_catalog();
        let large = ProductSpec::Size(Size::Large);
        let positions: Vec<_> = filter(&products, &large)
            .map(|hit| products.iter().position(|p| p == hit).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn cloned_iterator_replays_the_same_items() {
        let products = sample_catalog();
        let green = ProductSpec::Color(Color::Green);
        let hits = filter(&products, &green);
        let replay = hits.clone();

        assert_eq!(names(hits), names(replay));
        assert_eq!(
            names(filter(&products, &green)),
            names(filter(&products, &green))
        );
    }

    #[test]
    fn evaluates_lazily() {
        use std::cell::Cell;

        let products = sample_catalog();
        let calls = Cell::new(0);
        let counting = Matching(|_: &Product| {
            calls.set(calls.get() + 1);
            true
        });

        let mut hits = filter(&products, &counting);
        assert_eq!(calls.get(), 0);
        hits.next();
        assert_eq!(calls.get(), 1);
        assert_eq!(hits.count(), 2);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn works_for_any_item_type() {
        let numbers = [1, 2, 3, 4, 5, 6];
        let even = Matching(|n: &i32| n % 2 == 0);
        let evens: Vec<_> = filter(&numbers, &even).copied().collect();
        assert_eq!(evens, [2, 4, 6]);
    }

    #[test]
    fn accepts_trait_objects() {
        let products = sample_catalog();
        let spec: Box<dyn Specification<Product>> = Box::new(ProductSpec::Color(Color::Blue));
        assert_eq!(names(filter(&products, spec.as_ref())), ["house"]);
    }
}
