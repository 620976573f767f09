//! Load plan: the caller-side session state around the arranger.
//!
//! A [`LoadPlan`] owns the trailer bed, the default pallet dimensions, the
//! requested pallet count and the pallet sequence. Its setters validate input so
//! the arranger only ever sees positive dimensions, and nothing is re-arranged
//! until [`LoadPlan::rearrange`] or [`LoadPlan::update_pallet_quantity`] is called.

use crate::arranger::{apply_quantity, RowMajorArranger};
use crate::bed::Bed;
use crate::pallet::Pallet;
use nalgebra::Vector3;
use pallet_layout_core::arranger::Arranger;
use pallet_layout_core::geometry::Surface;
use pallet_layout_core::{
    ensure_bed_dimension, ensure_positive, ArrangeSummary, Color, Config, Error, Placement,
    Result,
};

/// Trailer, defaults and pallets for one loading session.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    bed: Bed,
    arranger: RowMajorArranger,
    pallet_number: usize,
    /// Store-wide default dimensions (width, length, height).
    defaults: Vector3<f64>,
    pallets: Vec<Pallet>,
    summary: ArrangeSummary,
}

impl LoadPlan {
    /// Creates a plan from a validated configuration and arranges its pallets.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    fn from_valid_config(config: &Config) -> Self {
        let bed = Bed::from_config(config);
        let arranger = RowMajorArranger::from_config(config);
        let defaults = Vector3::new(
            config.pallet_width,
            config.pallet_length,
            config.pallet_height,
        );

        let pallets = apply_quantity(Vec::new(), config.pallet_count, &defaults);
        let (pallets, summary) = arrange_logged(&arranger, &bed, pallets);

        Self {
            bed,
            arranger,
            pallet_number: config.pallet_count,
            defaults,
            pallets,
            summary,
        }
    }

    /// Returns the trailer bed.
    pub fn bed(&self) -> &Bed {
        &self.bed
    }

    /// Returns the arranger settings.
    pub fn arranger(&self) -> &RowMajorArranger {
        &self.arranger
    }

    /// Returns the requested pallet count.
    pub fn pallet_number(&self) -> usize {
        self.pallet_number
    }

    /// Returns the default pallet dimensions (width, length, height).
    pub fn pallet_defaults(&self) -> &Vector3<f64> {
        &self.defaults
    }

    /// Returns the pallets in placement order.
    pub fn pallets(&self) -> &[Pallet] {
        &self.pallets
    }

    /// Returns a pallet by placement index.
    pub fn pallet(&self, index: usize) -> Option<&Pallet> {
        self.pallets.get(index)
    }

    /// Returns the summary of the last arrangement pass.
    pub fn summary(&self) -> &ArrangeSummary {
        &self.summary
    }

    /// Sets the bed width. Takes effect on the next [`rearrange`](Self::rearrange).
    pub fn set_trailer_width(&mut self, width: f64) -> Result<()> {
        self.bed.set_width(ensure_bed_dimension("trailer width", width)?);
        Ok(())
    }

    /// Sets the bed length. Takes effect on the next [`rearrange`](Self::rearrange).
    pub fn set_trailer_length(&mut self, length: f64) -> Result<()> {
        self.bed
            .set_length(ensure_bed_dimension("trailer length", length)?);
        Ok(())
    }

    /// Sets the bed interior height.
    pub fn set_trailer_height(&mut self, height: f64) -> Result<()> {
        self.bed
            .set_height(ensure_bed_dimension("trailer height", height)?);
        Ok(())
    }

    /// Sets the requested pallet count. Takes effect on the next
    /// [`update_pallet_quantity`](Self::update_pallet_quantity).
    pub fn set_pallet_number(&mut self, count: usize) {
        self.pallet_number = count;
    }

    /// Sets the default width and applies it to every pallet not resized on its own.
    pub fn change_pallet_width(&mut self, width: f64) -> Result<()> {
        self.defaults.x = ensure_positive("pallet width", width)?;
        self.shared_pallets_mut().for_each(|p| p.set_width(width));
        Ok(())
    }

    /// Sets the default length and applies it to every pallet not resized on its own.
    pub fn change_pallet_length(&mut self, length: f64) -> Result<()> {
        self.defaults.y = ensure_positive("pallet length", length)?;
        self.shared_pallets_mut().for_each(|p| p.set_length(length));
        Ok(())
    }

    /// Sets the default height and applies it to every pallet not resized on its own.
    pub fn change_pallet_height(&mut self, height: f64) -> Result<()> {
        self.defaults.z = ensure_positive("pallet height", height)?;
        self.shared_pallets_mut().for_each(|p| p.set_height(height));
        Ok(())
    }

    fn shared_pallets_mut(&mut self) -> impl Iterator<Item = &mut Pallet> {
        self.pallets
            .iter_mut()
            .filter(|p| !p.is_individually_sized())
    }

    /// Resizes one pallet and exempts it from later store-wide resizes.
    pub fn resize_pallet(
        &mut self,
        index: usize,
        width: f64,
        length: f64,
        height: f64,
    ) -> Result<()> {
        ensure_positive("pallet width", width)?;
        ensure_positive("pallet length", length)?;
        ensure_positive("pallet height", height)?;

        let pallet = self.pallet_mut(index)?;
        pallet.set_width(width);
        pallet.set_length(length);
        pallet.set_height(height);
        pallet.set_individually_sized(true);
        Ok(())
    }

    /// Sets or clears one pallet's custom color.
    pub fn set_pallet_color(&mut self, index: usize, color: Option<Color>) -> Result<()> {
        self.pallet_mut(index)?.set_color(color);
        Ok(())
    }

    fn pallet_mut(&mut self, index: usize) -> Result<&mut Pallet> {
        let len = self.pallets.len();
        self.pallets
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Flips wireframe display on every pallet.
    pub fn toggle_wireframe(&mut self) {
        self.pallets.iter_mut().for_each(Pallet::toggle_wireframe);
    }

    /// Flips visibility on every pallet.
    pub fn toggle_visible(&mut self) {
        self.pallets.iter_mut().for_each(Pallet::toggle_visible);
    }

    /// Grows or shrinks the pallet sequence to the requested count, then rearranges.
    pub fn update_pallet_quantity(&mut self) -> ArrangeSummary {
        let pallets = std::mem::take(&mut self.pallets);
        self.pallets = apply_quantity(pallets, self.pallet_number, &self.defaults);
        self.rearrange()
    }

    /// Runs the arranger over the current pallets and bed.
    pub fn rearrange(&mut self) -> ArrangeSummary {
        let pallets = std::mem::take(&mut self.pallets);
        let (pallets, summary) = arrange_logged(&self.arranger, &self.bed, pallets);
        self.pallets = pallets;
        self.summary = summary.clone();
        summary
    }

    /// Plain records for the presentation layer, in placement order.
    pub fn placements(&self) -> Vec<Placement> {
        self.pallets
            .iter()
            .enumerate()
            .map(|(i, p)| p.to_placement(i))
            .collect()
    }

    /// Exports the current state as a configuration.
    pub fn to_config(&self) -> Config {
        Config::new()
            .with_trailer(self.bed.width(), self.bed.length())
            .with_trailer_height(self.bed.height())
            .with_pallet(self.defaults.x, self.defaults.y, self.defaults.z)
            .with_pallet_count(self.pallet_number)
            .with_margin(self.arranger.margin())
            .with_spacing(self.arranger.spacing())
    }
}

fn arrange_logged(
    arranger: &RowMajorArranger,
    bed: &Bed,
    pallets: Vec<Pallet>,
) -> (Vec<Pallet>, ArrangeSummary) {
    let result = arranger.arrange(bed, pallets);
    let summary = ArrangeSummary::from(&result);

    if !result.all_placed() {
        log::info!(
            "{} of {} pallets do not fit on the {}x{} bed",
            result.overflow_count(),
            result.total(),
            bed.width(),
            bed.length()
        );
    }

    (result.into_items(), summary)
}

impl Default for LoadPlan {
    fn default() -> Self {
        Self::from_valid_config(&Config::default())
    }
}
