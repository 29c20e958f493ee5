//! ONNX-based sentence encoder using all-MiniLM-L6-v2.
//!
//! Loads a SentenceTransformers ONNX model and its HuggingFace tokenizer,
//! truncates input to the model's maximum sequence length, and mean-pools
//! the last hidden state under the attention mask. Requires the `onnx`
//! feature.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;

    use bioqa_core::{Error, Result};
    use ndarray::Array1;
    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tokenizers::Tokenizer;
    use tracing::{info, warn};

    use crate::cache::EmbeddingCache;
    use crate::embedder::EmbedderBackend;

    /// Maximum token sequence length for the model.
    const MAX_SEQ_LEN: usize = 512;

    /// Embedding dimension of all-MiniLM-L6-v2.
    const EMBEDDING_DIM: usize = 384;

    /// ONNX sentence encoder.
    pub struct OnnxEmbedder {
        session: Mutex<Session>,
        tokenizer: Tokenizer,
        cache: EmbeddingCache,
        dimension: usize,
    }

    impl OnnxEmbedder {
        /// Load the model and tokenizer from a directory.
        ///
        /// Expects `model_dir/model.onnx` and `model_dir/tokenizer.json`.
        /// A missing file is fatal: the caller must not serve requests
        /// without its encoder.
        pub fn load(model_dir: &Path) -> Result<Self> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");

            if !model_path.exists() {
                return Err(Error::ModelLoad(format!(
                    "model not found: {}",
                    model_path.display()
                )));
            }
            if !tokenizer_path.exists() {
                return Err(Error::ModelLoad(format!(
                    "tokenizer not found: {}",
                    tokenizer_path.display()
                )));
            }

            // With load-dynamic, ORT_DYLIB_PATH must point to libonnxruntime.
            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| Error::ModelLoad(format!("session builder: {e}")))?
                .with_intra_threads(2)
                .map_err(|e| Error::ModelLoad(format!("session threads: {e}")))?
                .commit_from_file(&model_path)
                .map_err(|e| Error::ModelLoad(format!("load model: {e}")))?;

            let tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| Error::ModelLoad(format!("load tokenizer: {e}")))?;

            info!(
                "ONNX encoder loaded: dim={}, model={}",
                EMBEDDING_DIM,
                model_path.display()
            );

            Ok(Self {
                session: Mutex::new(session),
                tokenizer,
                cache: EmbeddingCache::default_cache(),
                dimension: EMBEDDING_DIM,
            })
        }

        fn infer(&self, text: &str) -> Result<Array1<f32>> {
            let encoding = self
                .tokenizer
                .encode(text, true)
                .map_err(|e| Error::Tokenize(e.to_string()))?;

            let input_ids = encoding.get_ids();
            let attention_mask = encoding.get_attention_mask();

            // Truncate to the model's maximum sequence length.
            let seq_len = input_ids.len().min(MAX_SEQ_LEN);
            if seq_len == 0 {
                return Err(Error::Inference("empty token sequence".into()));
            }
            let input_ids = &input_ids[..seq_len];
            let attention_mask = &attention_mask[..seq_len];

            let ids_data: Vec<i64> = input_ids.iter().map(|&id| id as i64).collect();
            let mask_data: Vec<i64> = attention_mask.iter().map(|&m| m as i64).collect();
            let type_ids_data: Vec<i64> = vec![0i64; seq_len];

            let ids_tensor = Tensor::from_array(([1usize, seq_len], ids_data))
                .map_err(|e| Error::Inference(format!("ids tensor: {e}")))?;
            let mask_tensor = Tensor::from_array(([1usize, seq_len], mask_data))
                .map_err(|e| Error::Inference(format!("mask tensor: {e}")))?;
            let type_ids_tensor = Tensor::from_array(([1usize, seq_len], type_ids_data))
                .map_err(|e| Error::Inference(format!("type_ids tensor: {e}")))?;

            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![ids_tensor, mask_tensor, type_ids_tensor])
                .map_err(|e| Error::Inference(format!("session run: {e}")))?;

            // SentenceTransformers exports produce either token embeddings
            // [1, seq_len, dim] needing mean pooling, or a pre-pooled
            // sentence embedding [1, dim].
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| Error::Inference(format!("extract output: {e}")))?;
            let shape_dims: Vec<i64> = shape.iter().copied().collect();

            match shape_dims.as_slice() {
                [_, _, dim] => {
                    let dim = *dim as usize;
                    let mask_sum: f32 = attention_mask.iter().map(|&m| m as f32).sum();
                    if mask_sum < 1e-9 {
                        return Err(Error::Inference("all-zero attention mask".into()));
                    }
                    let mut pooled = Array1::zeros(dim);
                    for (i, &m) in attention_mask.iter().enumerate() {
                        if m > 0 {
                            let offset = i * dim;
                            for d in 0..dim {
                                pooled[d] += data[offset + d];
                            }
                        }
                    }
                    Ok(pooled / mask_sum)
                }
                [_, dim] => {
                    let dim = *dim as usize;
                    Ok(Array1::from_vec(data[..dim].to_vec()))
                }
                other => {
                    warn!("Unexpected encoder output shape: {:?}", other);
                    Err(Error::Inference(format!(
                        "unexpected output shape: {other:?}"
                    )))
                }
            }
        }
    }

    impl EmbedderBackend for OnnxEmbedder {
        fn embed(&self, text: &str) -> Result<Array1<f32>> {
            if let Some(cached) = self.cache.get(text) {
                return Ok(cached);
            }
            let embedding = self.infer(text)?;
            self.cache.put(text.to_string(), embedding.clone());
            Ok(embedding)
        }

        fn dimension(&self) -> usize {
            self.dimension
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_load_missing_model_is_fatal() {
            let dir = tempfile::tempdir().unwrap();
            let err = OnnxEmbedder::load(dir.path()).unwrap_err();
            assert!(matches!(err, Error::ModelLoad(_)));
        }
    }
}

#[cfg(feature = "onnx")]
pub use inner::OnnxEmbedder;
