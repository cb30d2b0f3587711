//! Shared `utils.ts` imported by generated validators.

use crate::traits::SupportFile;

pub static OBJECT_ID_SUPPORT: SupportFile = SupportFile {
    file_name: "utils.ts",
    content: "import { ObjectId } from 'mongodb';
import { z } from 'zod';

// Accepts ObjectId instances and 24-character hex strings
export const ObjectIdSchema = z.union([
  z.instanceof(ObjectId),
  z.string().regex(/^[0-9a-fA-F]{24}$/).transform((value) => new ObjectId(value)),
]);
",
};
