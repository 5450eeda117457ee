use crate::{encoding::*, error::PduResult};

#[derive(PartialEq, Debug)]
pub struct WriteSingleRegisterRequest {
    pub address: u16,
    pub value: i32,
    pub signed: bool,
}

impl Encodable for WriteSingleRegisterRequest {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        encoder.write_u16(self.address);
        encoder.write_register(self.value, self.signed)
    }
}
