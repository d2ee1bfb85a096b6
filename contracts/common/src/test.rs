use crate::{FixedI128, PERCENTAGE_FACTOR};

mod fixedi128 {

    use super::*;

    #[test]
    fn percent_mul() {
        let percent = 500; // 5%
        let value = 1000;
        assert_eq!(
            FixedI128::from_rational(percent, PERCENTAGE_FACTOR)
                .unwrap()
                .mul_int(value)
                .unwrap(),
            50
        );
    }

    #[test]
    fn from_inner() {
        let inner = FixedI128::DENOMINATOR;
        assert_eq!(FixedI128::from_inner(inner), FixedI128::ONE);
        assert_eq!(FixedI128::from_inner(100).into_inner(), 100);
    }

    #[test]
    fn from_rational() {
        let fixed = FixedI128::from_rational(1, 2).unwrap();
        assert_eq!(fixed.into_inner(), 500_000_000);

        assert_eq!(FixedI128::from_rational(1, 0), None);
    }

    #[test]
    fn from_percentage() {
        let percentage = 8_000; // 80%
        let fixed = FixedI128::from_percentage(percentage).unwrap();
        assert_eq!(fixed, FixedI128::from_rational(4, 5).unwrap());
    }

    #[test]
    fn from_percentage_change() {
        assert_eq!(
            FixedI128::from_percentage_change(-2_500).unwrap(),
            FixedI128::from_rational(3, 4).unwrap()
        );
        assert_eq!(
            FixedI128::from_percentage_change(1_000).unwrap(),
            FixedI128::from_rational(11, 10).unwrap()
        );
        assert_eq!(
            FixedI128::from_percentage_change(-10_000).unwrap(),
            FixedI128::ZERO
        );
        assert_eq!(FixedI128::from_percentage_change(0).unwrap(), FixedI128::ONE);
    }

    #[test]
    fn mul_rational() {
        let price = FixedI128::from_int(10).unwrap();

        // 100 tokens with 7 decimals
        assert_eq!(
            price.mul_rational_floor(1_000_000_000, 10_000_000).unwrap(),
            FixedI128::from_int(1_000).unwrap()
        );

        // single unit of 18 decimals asset still counts
        let one_token = 10i128.pow(18);
        let dust = FixedI128::from_int(one_token).unwrap();
        assert_eq!(dust.mul_rational_floor(1, one_token).unwrap(), FixedI128::ONE);

        let third = FixedI128::ONE.mul_rational_floor(1, 3).unwrap();
        assert_eq!(third.into_inner(), 333_333_333);
        let third = FixedI128::ONE.mul_rational_ceil(1, 3).unwrap();
        assert_eq!(third.into_inner(), 333_333_334);
    }

    #[test]
    fn mul() {
        let two = FixedI128::from_int(2).unwrap();
        let product = two.checked_mul(two).unwrap();
        assert_eq!(product, FixedI128::from_int(4).unwrap());
        assert_eq!(product.into_inner(), 4 * FixedI128::DENOMINATOR);
    }

    #[test]
    fn div() {
        let four = FixedI128::from_int(4).unwrap();
        let two = FixedI128::from_int(2).unwrap();
        let result = four.checked_div(two).unwrap();

        assert_eq!(result, two);

        let quarter = FixedI128::ONE.checked_div(four).unwrap();
        assert_eq!(quarter, FixedI128::from_rational(1, 4).unwrap());

        let three = FixedI128::from_int(3).unwrap();
        assert_eq!(FixedI128::ONE.checked_div(three).unwrap().into_inner(), 333_333_333);
        assert_eq!(
            FixedI128::ONE.checked_div_ceil(three).unwrap().into_inner(),
            333_333_334
        );
    }

    #[test]
    fn add_sub() {
        let half = FixedI128::from_rational(1, 2).unwrap();
        let another = FixedI128::from_rational(5, 7).unwrap();

        assert_eq!(
            half.checked_add(another).unwrap(),
            FixedI128::from_rational(17, 14).unwrap()
        );

        let quarter = FixedI128::from_rational(1, 4).unwrap();
        let result = FixedI128::ONE.checked_sub(quarter).unwrap();

        assert_eq!(result, FixedI128::from_rational(3, 4).unwrap());
    }

    #[test]
    fn neg_and_sign() {
        let two = FixedI128::from_int(2).unwrap();
        let minus_two = two.checked_neg().unwrap();

        assert!(minus_two.is_negative());
        assert!(two.is_positive());
        assert!(!FixedI128::ZERO.is_positive() && !FixedI128::ZERO.is_negative());
        assert_eq!(minus_two.abs(), two);
        assert_eq!(FixedI128::from_inner(i128::MIN).checked_neg(), None);
    }

    #[test]
    fn mul_int() {
        let value = 1000;
        let quarter = FixedI128::from_rational(1, 4).unwrap();

        assert_eq!(quarter.mul_int(value).unwrap(), 250);

        let value = i128::MAX;
        assert_eq!(quarter.mul_int(value), None);
    }
}
