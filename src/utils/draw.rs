use rand::Rng;
use thiserror::Error;

/// 号码池大小：Tambola 固定使用 1..=90
pub const POOL_SIZE: i64 = 90;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    /// 90 个号码已全部叫完，本局游戏终止
    #[error("All numbers have been called")]
    PoolExhausted,
}

/// 从 1..=90 中未叫过的号码里等概率抽取一个。
///
/// 纯函数：不修改任何状态，调用方负责把结果追加到游戏记录。
/// RNG 由调用方传入，测试时可用固定种子获得确定性结果。
pub fn draw_number(called: &[i64], rng: &mut impl Rng) -> Result<i64, DrawError> {
    let remaining: Vec<i64> = (1..=POOL_SIZE).filter(|n| !called.contains(n)).collect();

    if remaining.is_empty() {
        return Err(DrawError::PoolExhausted);
    }

    // gen_range 在剩余数量上均匀分布，不使用拒绝采样
    Ok(remaining[rng.gen_range(0..remaining.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_draw_returns_number_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let number = draw_number(&[], &mut rng).unwrap();
        assert!((1..=POOL_SIZE).contains(&number));
    }

    #[test]
    fn test_draw_never_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut called = Vec::new();
        for _ in 0..POOL_SIZE {
            let number = draw_number(&called, &mut rng).unwrap();
            assert!(!called.contains(&number));
            assert!((1..=POOL_SIZE).contains(&number));
            called.push(number);
        }
        assert_eq!(called.len(), POOL_SIZE as usize);
    }

    #[test]
    fn test_exhausted_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let called: Vec<i64> = (1..=POOL_SIZE).collect();
        assert_eq!(draw_number(&called, &mut rng), Err(DrawError::PoolExhausted));
    }

    #[test]
    fn test_only_remaining_number_is_drawn() {
        let mut rng = StdRng::seed_from_u64(3);
        // 只剩 37 时必然抽到 37
        let called: Vec<i64> = (1..=POOL_SIZE).filter(|n| *n != 37).collect();
        assert_eq!(draw_number(&called, &mut rng), Ok(37));
    }

    #[test]
    fn test_draw_is_uniform_over_remaining() {
        // 固定已叫 80 个号码，剩余 81..=90 共 10 个
        let called: Vec<i64> = (1..=80).collect();
        let mut rng = StdRng::seed_from_u64(2024);

        let trials = 10_000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..trials {
            let number = draw_number(&called, &mut rng).unwrap();
            *counts.entry(number).or_insert(0usize) += 1;
        }

        // 每个剩余号码的期望频次为 1000，允许 ±20% 偏差
        for n in 81..=POOL_SIZE {
            let count = *counts.get(&n).unwrap_or(&0);
            assert!(
                (800..=1200).contains(&count),
                "number {n} drawn {count} times, expected ~1000"
            );
        }
    }
}
