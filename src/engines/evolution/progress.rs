use super::stats::GenerationStats;

/// Observer for the generational loop.
pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(
        &mut self,
        generation: usize,
        stats: &GenerationStats,
        hall_of_fame_size: usize,
    );
}

impl<'a, C: ProgressCallback + ?Sized> ProgressCallback for &'a mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        stats: &GenerationStats,
        hall_of_fame_size: usize,
    ) {
        (**self).on_generation_complete(generation, stats, hall_of_fame_size);
    }
}

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        println!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        stats: &GenerationStats,
        hall_of_fame_size: usize,
    ) {
        println!(
            "Generation {} complete. {}, Hall of Fame size: {}",
            generation + 1,
            stats,
            hall_of_fame_size
        );
    }
}
