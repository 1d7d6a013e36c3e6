use geom::LonLat;

use crate::{
    extract_intersections, intersections_to_geojson, parse_roads, roads_to_geojson, Assembler,
    ClickOutcome, ClickState, RoadCollection, SketchError, SketchOptions,
};

/// One independent editing session. This owns the roads; the map UI hands it clicks and asks it
/// for documents to render or download.
pub struct Session {
    roads: RoadCollection,
    assembler: Assembler,
    opts: SketchOptions,
}

impl Session {
    pub fn new(opts: SketchOptions) -> Session {
        Session {
            roads: RoadCollection::new(),
            assembler: Assembler::new(),
            opts,
        }
    }

    pub fn roads(&self) -> &RoadCollection {
        &self.roads
    }

    pub fn options(&self) -> &SketchOptions {
        &self.opts
    }

    pub fn state(&self) -> ClickState {
        self.assembler.state()
    }

    pub fn click(&mut self, pt: LonLat) -> ClickOutcome {
        debug!("Click at {}", pt);
        self.assembler.click(pt, &mut self.roads, &self.opts)
    }

    /// The next click starts a new, disconnected chain.
    pub fn finish_chain(&mut self) {
        self.assembler.finish_chain();
    }

    /// Replaces all roads with the contents of a GeoJSON document and starts a new chain. If the
    /// document is bad, nothing changes; the error is logged and returned so the UI can show it.
    pub fn load_document(&mut self, raw: &str) -> Result<(), SketchError> {
        match parse_roads(raw) {
            Ok(roads) => {
                info!("Loaded {} roads", roads.len());
                self.replace_roads(roads);
                Ok(())
            }
            Err(err) => {
                warn!("Not loading document: {}", err);
                Err(err)
            }
        }
    }

    pub fn replace_roads(&mut self, roads: RoadCollection) {
        self.roads = roads;
        self.assembler.finish_chain();
    }

    pub fn intersections(&self) -> Result<Vec<LonLat>, SketchError> {
        extract_intersections(&self.roads)
    }

    /// The roads as a GeoJSON string, ready to download.
    pub fn export_roads(&self) -> String {
        roads_to_geojson(&self.roads).to_string()
    }

    pub fn export_intersections(&self) -> Result<String, SketchError> {
        let intersections = self.intersections()?;
        Ok(intersections_to_geojson(&intersections).to_string())
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new(SketchOptions::default())
    }
}
