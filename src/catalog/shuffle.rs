//! 非破壊シャッフル

use rand::Rng;

/// Fisher–Yates で一様ランダムな並べ替えを返す（入力は変更しない）
///
/// 末尾から 1 まで、`[0, i]` から一様に選んだ位置と交換する。
pub fn shuffle<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
#[path = "shuffle_test.rs"]
mod tests;
