use enum_map::Enum;

pub fn enum_iter<E>() -> impl Iterator<Item = E>
where
    E: Enum,
{
    (0..E::LENGTH).map(|i| E::from_usize(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::common::{ClockPosition, Color, LayerId};

    #[test]
    fn iterates_in_declaration_order() {
        assert_eq!(enum_iter::<Color>().collect::<Vec<_>>(), Color::ALL.to_vec());
        assert_eq!(
            enum_iter::<LayerId>().collect::<Vec<_>>(),
            vec![LayerId::Top, LayerId::Middle, LayerId::Bottom]
        );
        assert_eq!(enum_iter::<ClockPosition>().last(), Some(ClockPosition::TenThirty));
    }
}
